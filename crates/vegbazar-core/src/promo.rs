//! Promotional banners with persisted dismissal.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::dismissal::{promo_key, DismissalPolicy, DismissalRecord};
use crate::error::StorefrontResult;
use crate::storage::Storage;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromoBanner {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub cta_label: String,
}

impl PromoBanner {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        subtitle: impl Into<String>,
        cta_label: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            subtitle: subtitle.into(),
            cta_label: cta_label.into(),
        }
    }
}

/// Banners the user has not dismissed within the policy window.
///
/// A record that cannot be read counts as "not dismissed".
pub fn visible_banners(
    banners: &[PromoBanner],
    storage: &Storage,
    policy: &DismissalPolicy,
    now: DateTime<Utc>,
) -> Vec<PromoBanner> {
    banners
        .iter()
        .filter(|banner| {
            let record = storage
                .load_dismissal(&promo_key(&banner.id))
                .unwrap_or_else(|e| {
                    tracing::warn!(banner = %banner.id, error = %e, "Failed to read banner dismissal");
                    None
                });
            policy.should_show(record.as_ref(), now)
        })
        .cloned()
        .collect()
}

/// Remember that the user closed `banner_id`.
pub fn dismiss_banner(storage: &Storage, banner_id: &str, now: DateTime<Utc>) -> StorefrontResult<()> {
    storage.save_dismissal(&promo_key(banner_id), &DismissalRecord::dismissed_at(now))
}

/// The storefront's standing promotions.
pub fn default_banners() -> Vec<PromoBanner> {
    vec![
        PromoBanner::new(
            "first-order",
            "Flat ₹50 off your first order",
            "Farm-fresh vegetables delivered in 30 minutes",
            "Shop now",
        ),
        PromoBanner::new(
            "wallet-cashback",
            "Earn 5% cashback",
            "Pay with the VegBazar wallet on orders above ₹299",
            "Learn more",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use tempfile::TempDir;

    #[test]
    fn dismissed_banner_is_hidden_until_window_passes() {
        let temp = TempDir::new().unwrap();
        let storage = Storage::new(temp.path().join("vegbazar.redb")).unwrap();
        let policy = DismissalPolicy::default();
        let now = Utc.with_ymd_and_hms(2026, 10, 19, 8, 0, 0).unwrap();
        let banners = default_banners();

        assert_eq!(visible_banners(&banners, &storage, &policy, now).len(), 2);

        dismiss_banner(&storage, "first-order", now).unwrap();
        let visible = visible_banners(&banners, &storage, &policy, now + Duration::days(1));
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "wallet-cashback");

        let later = now + Duration::days(7) + Duration::minutes(1);
        assert_eq!(visible_banners(&banners, &storage, &policy, later).len(), 2);
    }
}

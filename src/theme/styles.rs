//! Global CSS styles for the VegBazar storefront.
//!
//! Fresh-market palette: leaf greens on warm paper, turmeric for offers.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* PAPER (Backgrounds) */
  --paper: #fbf8f1;
  --paper-raised: #f8f9fa;
  --paper-border: #e7e1d3;

  /* LEAF GREEN (Brand, Primary actions) */
  --leaf: #2f9e44;
  --leaf-dark: #237a34;
  --leaf-soft: #e5f2e4;

  /* TURMERIC (Offers, Cashback) */
  --turmeric: #f59f00;
  --turmeric-soft: #fff3da;

  /* TEXT */
  --text-primary: #1d2a1e;
  --text-secondary: rgba(29, 42, 30, 0.72);
  --text-muted: rgba(29, 42, 30, 0.5);

  /* SEMANTIC */
  --danger: #c62828;
  --star: #f5b301;

  /* Typography */
  --font-sans: 'Inter', 'Segoe UI', Roboto, sans-serif;

  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-xl: 1.5rem;
  --text-2xl: 2rem;

  /* Transitions: keep in step with the carousel transition delay */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  background: var(--paper);
  color: var(--text-primary);
  font-family: var(--font-sans);
  font-size: var(--text-base);
  line-height: 1.5;
}

.page {
  max-width: 1040px;
  margin: 0 auto;
  padding: 1.5rem;
  display: flex;
  flex-direction: column;
  gap: 2rem;
}

.site-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 1rem 1.5rem;
  background: var(--paper-raised);
  border-bottom: 1px solid var(--paper-border);
}

.brand {
  font-size: var(--text-xl);
  font-weight: 700;
  color: var(--leaf);
}

.section-title {
  font-size: var(--text-lg);
  font-weight: 600;
  margin-bottom: 0.75rem;
}

/* === Buttons === */
.btn-primary, .btn-outline, .btn-ghost, .btn-offer {
  border-radius: 8px;
  padding: 0.5rem 1rem;
  font-size: var(--text-sm);
  font-weight: 600;
  cursor: pointer;
  transition: background var(--transition-fast), color var(--transition-fast);
}

.btn-primary {
  background: var(--leaf);
  color: #fff;
  border: 1px solid var(--leaf);
}

.btn-primary:hover { background: var(--leaf-dark); }

.btn-outline {
  background: transparent;
  color: var(--leaf);
  border: 1px solid var(--leaf);
}

.btn-ghost {
  background: transparent;
  color: var(--text-secondary);
  border: 1px solid transparent;
}

.btn-offer {
  background: var(--turmeric);
  color: #fff;
  border: 1px solid var(--turmeric);
}

button:disabled {
  opacity: 0.5;
  cursor: not-allowed;
}

.icon-btn {
  width: 2.25rem;
  height: 2.25rem;
  border-radius: 50%;
  border: 1px solid var(--paper-border);
  background: var(--paper-raised);
  cursor: pointer;
}

.close-btn {
  position: absolute;
  top: 0.5rem;
  right: 0.5rem;
  border: none;
  background: transparent;
}

/* === Promo banners === */
.promo-strip {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
  gap: 1rem;
}

.promo-banner {
  position: relative;
  padding: 1.25rem;
  border-radius: 12px;
  background: var(--turmeric-soft);
  border: 1px solid var(--turmeric);
}

.promo-title { font-weight: 700; }
.promo-subtitle { color: var(--text-secondary); margin: 0.25rem 0 0.75rem; }

/* === Install banner === */
.install-banner {
  position: relative;
  padding: 1rem 1.25rem;
  border-radius: 12px;
  background: var(--leaf-soft);
  border: 1px solid var(--leaf);
}

.install-steps {
  margin: 0.5rem 0 0 1.25rem;
  color: var(--text-secondary);
  font-size: var(--text-sm);
}

/* === Catalog === */
.catalog {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(200px, 1fr));
  gap: 1rem;
}

.product-card {
  padding: 1rem;
  border-radius: 12px;
  background: var(--paper-raised);
  border: 1px solid var(--paper-border);
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
}

.product-name { font-weight: 600; }
.product-price { color: var(--leaf-dark); }

.cart-summary {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 1rem;
  border-radius: 12px;
  background: var(--paper-raised);
  border: 1px solid var(--paper-border);
}

/* === Testimonial carousel === */
.testimonial-carousel {
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
}

.carousel-stage {
  display: flex;
  align-items: center;
  gap: 1rem;
}

.testimonial-card {
  flex: 1;
  display: grid;
  grid-template-columns: 3rem 1fr;
  gap: 0.25rem 1rem;
  padding: 1.25rem;
  border-radius: 12px;
  background: var(--paper-raised);
  border: 1px solid var(--paper-border);
  opacity: 1;
  transition: opacity var(--transition-normal);
}

.testimonial-card.fading { opacity: 0; }

.author-initial {
  grid-row: span 3;
  width: 3rem;
  height: 3rem;
  border-radius: 50%;
  background: var(--leaf-soft);
  color: var(--leaf-dark);
  font-weight: 700;
  display: flex;
  align-items: center;
  justify-content: center;
}

.testimonial-comment { font-style: italic; }
.testimonial-author { color: var(--text-secondary); display: flex; gap: 0.5rem; }
.testimonial-excerpt { display: none; }
.rating-label { font-size: var(--text-xs); color: var(--text-muted); }

.carousel-placeholder {
  flex: 1;
  text-align: center;
  color: var(--text-muted);
}

.carousel-placeholder.invalid { color: var(--danger); }

.carousel-indicators {
  display: flex;
  justify-content: center;
  gap: 0.5rem;
}

.carousel-dot {
  width: 0.625rem;
  height: 0.625rem;
  border-radius: 50%;
  border: none;
  background: var(--paper-border);
  cursor: pointer;
}

.carousel-dot.active { background: var(--leaf); }

.rating-stars { color: var(--paper-border); }
.star.filled { color: var(--star); }

/* === Order placed === */
.order-confirmation {
  text-align: center;
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 1rem;
}

.order-id {
  display: inline-flex;
  align-items: center;
  gap: 0.75rem;
  padding: 0.5rem 1rem;
  border-radius: 8px;
  background: var(--paper-raised);
  border: 1px dashed var(--paper-border);
  font-family: monospace;
}

.copy-feedback { color: var(--leaf); font-size: var(--text-sm); }

/* === Cashback modal === */
.modal-backdrop {
  position: fixed;
  inset: 0;
  background: rgba(0, 0, 0, 0.45);
  display: flex;
  align-items: center;
  justify-content: center;
  animation: fade-in var(--transition-normal);
}

.cashback-modal {
  position: relative;
  min-width: 320px;
  padding: 2rem;
  border-radius: 16px;
  background: var(--paper-raised);
  text-align: center;
  animation: pop-in var(--transition-normal);
}

.modal-backdrop.exiting { animation: fade-out var(--transition-normal) forwards; }
.modal-backdrop.exiting .cashback-modal { animation: pop-out var(--transition-normal) forwards; }

.cashback-amount {
  font-size: var(--text-2xl);
  font-weight: 700;
  color: var(--turmeric);
}

.wallet-balance { color: var(--text-secondary); }

@keyframes fade-in { from { opacity: 0; } to { opacity: 1; } }
@keyframes fade-out { from { opacity: 1; } to { opacity: 0; } }
@keyframes pop-in { from { transform: scale(0.9); } to { transform: scale(1); } }
@keyframes pop-out { from { transform: scale(1); } to { transform: scale(0.9); } }
"#;

//! End-to-end carousel scenarios on the virtual clock and on tokio timers.

use std::time::Duration;

use vegbazar_core::carousel::{Carousel, CarouselBody, CarouselTiming, Direction, DisplayItem};
use vegbazar_core::timer::TokioScheduler;

fn asha_and_ravi() -> Vec<DisplayItem> {
    vec![
        DisplayItem::new("Great!", "Asha", 5),
        DisplayItem::new("Good", "Ravi", 3),
    ]
}

fn shown_author(carousel_body: &CarouselBody) -> &str {
    match carousel_body {
        CarouselBody::Item(item) => &item.author,
        other => panic!("expected an item, got {:?}", other),
    }
}

#[test]
fn asha_then_ravi_then_asha() {
    let mut carousel = Carousel::virtual_clock(CarouselTiming::default());
    carousel.mount(asha_and_ravi());

    let view = carousel.view();
    assert_eq!(view.active_index, 0);
    assert_eq!(shown_author(&view.body), "Asha");

    carousel.advance(Direction::Next);
    carousel.run_for(Duration::from_millis(300));
    let view = carousel.view();
    assert_eq!(view.active_index, 1);
    assert_eq!(shown_author(&view.body), "Ravi");

    carousel.advance(Direction::Next);
    carousel.run_for(Duration::from_millis(300));
    let view = carousel.view();
    assert_eq!(view.active_index, 0);
    assert_eq!(shown_author(&view.body), "Asha");
}

#[test]
fn empty_list_has_no_navigation() {
    let mut carousel = Carousel::virtual_clock(CarouselTiming::default());
    carousel.mount(Vec::new());

    assert!(!carousel.advance(Direction::Next));
    assert!(!carousel.go_to(0));
    carousel.run_for(Duration::from_secs(30));
    assert_eq!(carousel.view().body, CarouselBody::Empty);
}

#[test]
fn indicator_selection_jumps() {
    let mut carousel = Carousel::virtual_clock(CarouselTiming::default());
    carousel.mount(vec![
        DisplayItem::new("Crisp spinach", "Meera", 4),
        DisplayItem::new("On time", "Kabir", 5),
        DisplayItem::new("Ripe mangoes", "Zoya", 5),
    ]);

    assert!(carousel.go_to(2));
    assert!(carousel.view().fading);
    carousel.run_for(Duration::from_millis(300));

    let view = carousel.view();
    assert!(!view.fading);
    assert_eq!(shown_author(&view.body), "Zoya");
    assert!(view.indicators[2].active);
    assert!(!view.indicators[0].active);
}

#[test]
fn list_replaced_mid_transition_stays_in_bounds() {
    let mut carousel = Carousel::virtual_clock(CarouselTiming::default());
    carousel.mount(asha_and_ravi());
    carousel.advance(Direction::Previous);
    carousel.set_items(vec![DisplayItem::new("Only one", "Dev", 2)]);
    carousel.run_for(Duration::from_millis(300));

    assert_eq!(carousel.active_index(), 0);
    assert!(!carousel.is_transitioning());
    assert_eq!(shown_author(&carousel.view().body), "Dev");
}

#[tokio::test(start_paused = true)]
async fn tokio_driver_autoplays() {
    let (scheduler, mut fired) = TokioScheduler::channel();
    let mut carousel = Carousel::new(scheduler, CarouselTiming::default());
    carousel.mount(asha_and_ravi());

    // Autoplay tick
    let event = fired.recv().await.unwrap();
    carousel.fire(event);
    assert!(carousel.is_transitioning());
    assert_eq!(carousel.active_index(), 0);

    // Transition completes
    let event = fired.recv().await.unwrap();
    carousel.fire(event);
    assert_eq!(carousel.active_index(), 1);
    assert!(!carousel.is_transitioning());
}

#[tokio::test(start_paused = true)]
async fn tokio_driver_unmount_silences_timers() {
    let (scheduler, mut fired) = TokioScheduler::channel();
    let mut carousel = Carousel::new(scheduler, CarouselTiming::default());
    carousel.mount(asha_and_ravi());
    carousel.advance(Direction::Next);
    carousel.unmount();

    tokio::time::sleep(Duration::from_secs(20)).await;
    assert!(fired.try_recv().is_err());
    assert_eq!(carousel.scheduler().pending(), 0);
}

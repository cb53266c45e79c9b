use std::time::Duration;

use crossterm::event::KeyCode;

use sectionsnap::controller::{Command, ScrollAnimation};
use sectionsnap::input::InputDevice;
use sectionsnap::prelude::*;
use sectionsnap::section::stacked;
use sectionsnap::tween::Ease;

fn desktop_page() -> StaticPage {
    StaticPage::new(stacked(&[800.0; 5]), 1280.0, 800.0)
}

fn desktop_driver() -> ScrollDriver<StaticPage> {
    ScrollDriver::new(desktop_page(), ControllerConfig::default())
}

fn wheel(delta_y: f64) -> Message {
    Message::Wheel(WheelInput::new(delta_y))
}

fn key(code: KeyCode) -> Message {
    Message::Key(KeyInput::new(code))
}

/// Run the driver's clock from `from` to `to` in frame-sized steps and
/// count the animations that started along the way.
fn run_clock(driver: &mut ScrollDriver<StaticPage>, from: u64, to: u64) -> usize {
    let mut started = 0;
    let mut animating = driver.is_animating();
    let mut now = from;
    while now <= to {
        driver.tick(now);
        if driver.is_animating() && !animating {
            started += 1;
        }
        animating = driver.is_animating();
        now += 5;
    }
    started
}

#[test]
fn test_mouse_wheel_notch_scrolls_one_section() {
    let page = desktop_page();
    let mut scroller = SectionScroller::new(ControllerConfig::default(), &page);
    assert_eq!(scroller.state().current_section_index, 0);

    let commands = scroller.update(&page, wheel(120.0));
    let Some(&Command::ScheduleDebounce { handle, delay }) = commands.last() else {
        panic!("expected a debounce, got {commands:?}");
    };
    assert_eq!(commands[0], Command::PreventDefault);
    assert_eq!(delay, Duration::from_millis(30));

    let commands = scroller.update(&page, Message::DebounceElapsed(handle));
    let [Command::Animate(animation)] = commands.as_slice() else {
        panic!("expected one animation, got {commands:?}");
    };
    let ScrollAnimation {
        target,
        duration,
        ease,
        ..
    } = *animation;
    assert_eq!(target, 800.0);
    assert_eq!(duration, Duration::from_millis(200));
    assert_eq!(ease, Ease::Power3Out);
    assert_eq!(scroller.state().current_section_index, 1);
    assert!(scroller.is_scrolling());
}

#[test]
fn test_touchpad_burst_dispatches_once() {
    let mut driver = desktop_driver();
    for (i, now) in [0u64, 15, 30, 45].into_iter().enumerate() {
        assert_eq!(driver.handle(wheel(10.0), now), Dispatch::Consumed, "event {i}");
        driver.tick(now);
    }
    assert!(!driver.is_animating());

    let started = run_clock(&mut driver, 46, 700);
    assert_eq!(started, 1);
    assert_eq!(driver.page().scroll_offset(), 800.0);
    assert_eq!(driver.state().current_section_index, 1);
    assert_eq!(driver.state().accumulated_delta, 0.0);
}

#[test]
fn test_two_touchpad_events_dispatch_once() {
    let mut driver = desktop_driver();
    driver.handle(wheel(10.0), 0);
    driver.handle(wheel(10.0), 40);

    // The first debounce was cancelled; nothing fires at 50.
    assert_eq!(run_clock(&mut driver, 0, 85), 0);
    assert_eq!(run_clock(&mut driver, 90, 700), 1);
    assert_eq!(driver.state().current_section_index, 1);
}

#[test]
fn test_sub_threshold_gesture_does_not_scroll() {
    let mut driver = desktop_driver();
    driver.handle(wheel(10.0), 0);
    assert_eq!(run_clock(&mut driver, 0, 500), 0);
    assert_eq!(driver.page().scroll_offset(), 0.0);
    // The remainder is kept for the next gesture.
    assert_eq!(driver.state().accumulated_delta, 10.0);
}

#[test]
fn test_sub_threshold_remainder_carries_into_next_gesture() {
    let mut driver = desktop_driver();
    driver.handle(wheel(10.0), 0);
    run_clock(&mut driver, 0, 200);
    driver.handle(wheel(10.0), 1000);
    assert_eq!(run_clock(&mut driver, 1000, 1700), 1);
    assert_eq!(driver.state().current_section_index, 1);
}

#[test]
fn test_negative_delta_scrolls_back() {
    let mut driver = desktop_driver();
    driver.scroll_to(1600.0);
    assert_eq!(driver.state().current_section_index, 2);

    driver.handle(wheel(-120.0), 0);
    run_clock(&mut driver, 0, 300);
    assert_eq!(driver.page().scroll_offset(), 800.0);
    assert_eq!(driver.state().current_section_index, 1);
}

#[test]
fn test_wheel_at_last_section_is_a_no_op() {
    let mut driver = desktop_driver();
    driver.scroll_to(3200.0);
    driver.handle(wheel(120.0), 0);
    assert_eq!(run_clock(&mut driver, 0, 300), 0);
    assert_eq!(driver.page().scroll_offset(), 3200.0);
    assert!(!driver.state().is_scrolling);
    assert_eq!(driver.state().accumulated_delta, 0.0);
}

#[test]
fn test_no_second_animation_while_locked() {
    let mut driver = desktop_driver();
    assert_eq!(driver.handle(key(KeyCode::Down), 0), Dispatch::Consumed);
    assert!(driver.state().is_scrolling);

    // Input during the animation is dropped, not queued.
    driver.tick(50);
    assert_eq!(driver.handle(key(KeyCode::Down), 60), Dispatch::Native);
    assert_eq!(driver.handle(wheel(120.0), 70), Dispatch::Native);
    assert_eq!(driver.state().accumulated_delta, 0.0);

    run_clock(&mut driver, 75, 400);
    assert_eq!(driver.page().scroll_offset(), 800.0);
    assert_eq!(driver.state().current_section_index, 1);
    assert!(!driver.state().is_scrolling);
}

#[test]
fn test_out_of_range_targets_are_no_ops() {
    let page = desktop_page();
    let mut scroller = SectionScroller::new(ControllerConfig::default(), &page);
    let before = scroller.state().clone();

    assert_eq!(
        scroller.scroll_to_section(&page, -1, InputDevice::MouseWheel),
        None
    );
    assert_eq!(
        scroller.scroll_to_section(&page, 5, InputDevice::MouseWheel),
        None
    );
    assert_eq!(scroller.state(), &before);
}

#[test]
fn test_home_and_end_ignore_current_index() {
    let mut driver = desktop_driver();
    driver.scroll_to(1600.0);

    driver.handle(key(KeyCode::End), 0);
    run_clock(&mut driver, 0, 300);
    assert_eq!(driver.state().current_section_index, 4);
    assert_eq!(driver.page().scroll_offset(), 3200.0);

    driver.handle(key(KeyCode::Home), 1000);
    run_clock(&mut driver, 1000, 1300);
    assert_eq!(driver.state().current_section_index, 0);
    assert_eq!(driver.page().scroll_offset(), 0.0);
}

#[test]
fn test_keys_in_text_fields_pass_through() {
    let mut driver = desktop_driver();
    let input = KeyInput::new(KeyCode::Down).in_text_field();
    assert_eq!(driver.handle(Message::Key(input), 0), Dispatch::Native);
    assert!(!driver.is_animating());
}

#[test]
fn test_wheel_inside_form_passes_through() {
    let mut driver = desktop_driver();
    let input = WheelInput::new(120.0).in_form();
    assert_eq!(driver.handle(Message::Wheel(input), 0), Dispatch::Native);
    assert_eq!(driver.state().accumulated_delta, 0.0);
}

#[test]
fn test_mobile_width_keeps_native_scrolling() {
    let page = StaticPage::new(stacked(&[800.0; 5]), 768.0, 800.0);
    let mut driver = ScrollDriver::new(page, ControllerConfig::default());
    assert!(!driver.scroller().is_installed());
    assert_eq!(driver.handle(wheel(120.0), 0), Dispatch::Native);
    assert_eq!(driver.handle(key(KeyCode::Down), 0), Dispatch::Native);
    assert_eq!(run_clock(&mut driver, 0, 300), 0);
}

#[test]
fn test_anchor_click_supersedes_section_scroll() {
    let mut driver = desktop_driver();
    driver.handle(key(KeyCode::Down), 0);
    driver.tick(100);

    assert_eq!(
        driver.handle(Message::AnchorClick("#section-4".to_string()), 100),
        Dispatch::Consumed
    );
    run_clock(&mut driver, 105, 400);
    assert_eq!(driver.page().scroll_offset(), 2400.0);
    assert_eq!(driver.state().current_section_index, 3);
    assert!(!driver.state().is_scrolling);
}

#[test]
fn test_unknown_anchor_is_swallowed() {
    let mut driver = desktop_driver();
    assert_eq!(
        driver.handle(Message::AnchorClick("#nowhere".to_string()), 0),
        Dispatch::Consumed
    );
    assert!(!driver.is_animating());
    assert!(!driver.state().is_scrolling);
}

#[test]
fn test_native_scroll_updates_current_section() {
    let mut driver = desktop_driver();
    driver.scroll_to(2500.0);
    assert_eq!(driver.state().current_section_index, 3);
    driver.scroll_by(-900.0);
    assert_eq!(driver.state().current_section_index, 2);
}

#[test]
fn test_stale_debounce_is_ignored() {
    let page = desktop_page();
    let mut scroller = SectionScroller::new(ControllerConfig::default(), &page);
    let first = scroller.update(&page, wheel(120.0));
    let Some(&Command::ScheduleDebounce { handle: stale, .. }) = first.last() else {
        panic!("expected a debounce");
    };
    scroller.update(&page, wheel(120.0));

    assert!(scroller
        .update(&page, Message::DebounceElapsed(stale))
        .is_empty());
    assert!(!scroller.is_scrolling());
    assert_eq!(scroller.state().accumulated_delta, 240.0);
}

use worldcal_calendar::{date_from_day_count, CalendarError, Direction, Navigator};

#[test]
fn navigation_symmetry() {
    // Any number of forward steps followed by the same number of
    // backward steps returns to the original viewed month.
    let mut navigator = Navigator::new();
    navigator.set_anchor(1000).unwrap();
    let origin = navigator.render_info().unwrap();

    for steps in 1..=30 {
        for _ in 0..steps {
            navigator.navigate(Direction::Next).unwrap();
        }
        for _ in 0..steps {
            navigator.navigate(Direction::Previous).unwrap();
        }
        let back = navigator.render_info().unwrap();
        assert_eq!(back, origin, "after {steps} steps each way");
    }
}

#[test]
fn highlight_iff_anchor_month() {
    let anchor = 75; // year 0, month 2
    let anchor_date = date_from_day_count(anchor).unwrap();
    let mut navigator = Navigator::new();
    navigator.set_anchor(anchor).unwrap();

    // Walk a window of months around the anchor and check the highlight
    // invariant on every one of them.
    for _ in 0..18 {
        navigator.navigate(Direction::Previous).unwrap();
    }
    for _ in 0..36 {
        navigator.navigate(Direction::Next).unwrap();
        let info = navigator.render_info().unwrap();
        let on_anchor_month =
            info.year() == anchor_date.year() && info.month() == anchor_date.month();
        if on_anchor_month {
            assert_eq!(info.highlighted_day(), Some(anchor_date.day()));
        } else {
            assert_eq!(info.highlighted_day(), None);
        }
    }
}

#[test]
fn twelve_steps_cross_exactly_one_year() {
    let mut navigator = Navigator::new();
    navigator.set_anchor(400).unwrap(); // year 1, month 1
    for _ in 0..12 {
        navigator.navigate(Direction::Next).unwrap();
    }
    let info = navigator.render_info().unwrap();
    assert_eq!((info.year(), info.month()), (2, 1));
    // Same month one year later keeps the month length.
    assert_eq!(info.days_in_month(), 28);
}

#[test]
fn render_info_matches_converter_every_month() {
    let anchor = 12345;
    let mut navigator = Navigator::new();
    navigator.set_anchor(anchor).unwrap();

    for _ in 0..48 {
        navigator.navigate(Direction::Previous).unwrap();
        let info = navigator.render_info().unwrap();
        let first =
            worldcal_calendar::first_day_count_of_month(anchor, info.year(), info.month()).unwrap();
        assert_eq!(
            info.weekday_offset(),
            worldcal_calendar::weekday_offset(first)
        );
        assert_eq!(
            info.days_in_month(),
            worldcal_calendar::days_in_month(info.month()).unwrap()
        );
    }
}

#[test]
fn unanchored_navigator_reports_invalid_state() {
    let mut navigator = Navigator::new();
    assert_eq!(
        navigator.render_info().unwrap_err(),
        CalendarError::AnchorNotSet
    );
    assert_eq!(
        navigator.navigate(Direction::Previous).unwrap_err(),
        CalendarError::AnchorNotSet
    );
    assert_eq!(navigator.viewed().unwrap_err(), CalendarError::AnchorNotSet);
}

#[test]
fn backward_navigation_is_unbounded() {
    let mut navigator = Navigator::new();
    navigator.set_anchor(1).unwrap();
    for _ in 0..25 {
        navigator.navigate(Direction::Previous).unwrap();
    }
    let info = navigator.render_info().unwrap();
    assert_eq!((info.year(), info.month()), (-3, 11));
    assert!(info.weekday_offset() <= 6);
}

use legal_lens::verdict::{clamp_score, render, Tier};

#[test]
fn test_tier_boundaries() {
    assert_ne!(render(40).tier, render(41).tier);
    assert_ne!(render(75).tier, render(76).tier);
    assert_eq!(render(0).tier, Tier::HighRisk);
    assert_eq!(render(100).tier, Tier::Safe);
}

#[test]
fn test_each_tier_has_distinct_color_and_label() {
    let low = render(10);
    let mid = render(60);
    let high = render(90);

    assert_ne!(low.color, mid.color);
    assert_ne!(mid.color, high.color);
    assert_ne!(low.label, high.label);
    assert_eq!(low.tier.hex(), "#ef4444");
    assert_eq!(mid.tier.hex(), "#f59e0b");
    assert_eq!(high.tier.hex(), "#22c55e");
}

#[test]
fn test_render_is_pure() {
    for score in [0, 40, 41, 75, 76, 100] {
        let a = render(score);
        let b = render(score);
        assert_eq!(a.color, b.color);
        assert_eq!(a.label, b.label);
        assert_eq!(a, b);
    }
}

#[test]
fn test_gauge_fraction() {
    assert!((render(82).gauge_fraction - 0.82).abs() < 1e-9);
    assert!(render(0).gauge_fraction.abs() < 1e-9);
    assert!((render(100).gauge_fraction - 1.0).abs() < 1e-9);
}

#[test]
fn test_out_of_range_scores_are_clamped() {
    let under = render(-20);
    assert_eq!(under.score, 0);
    assert_eq!(under.tier, Tier::HighRisk);
    assert!(under.gauge_fraction.abs() < 1e-9);

    let over = render(180);
    assert_eq!(over.score, 100);
    assert_eq!(over.tier, Tier::Safe);
    assert!((over.gauge_fraction - 1.0).abs() < 1e-9);

    assert_eq!(clamp_score(i64::MAX), 100);
    assert_eq!(clamp_score(i64::MIN), 0);
}

#[test]
fn test_headlines() {
    insta::assert_snapshot!(render(30).headline, @"Do Not Trust");
    insta::assert_snapshot!(render(60).headline, @"Proceed with Caution");
    insta::assert_snapshot!(render(82).headline, @"Looks Safe");
}

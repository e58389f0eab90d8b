// Integration tests for srcset generation
// Tests cover: strategy selection, DPR quality curve, width ladders, signing

use pixurl::{Params, SrcSetOptions, UrlBuilder, target_widths, widths};

fn builder() -> UrlBuilder {
    UrlBuilder::new("demos.imgix.net")
        .unwrap()
        .with_include_library_param(false)
}

fn candidates(srcset: &str) -> Vec<&str> {
    srcset.split(",\n").collect()
}

// ============================================================================
// Strategy Selection
// ============================================================================

#[test]
fn test_default_srcset_is_width_based() {
    let srcset = builder()
        .create_srcset("image.jpg", &Params::new(), &SrcSetOptions::new())
        .unwrap();
    let lines = candidates(&srcset);

    assert_eq!(lines.len(), 31, "default ladder must have 31 candidates");
    assert!(lines[0].ends_with(" 100w"));
    assert!(lines[30].ends_with(" 8192w"));
}

#[test]
fn test_default_srcset_matches_canonical_ladder() {
    let srcset = builder()
        .create_srcset("image.jpg", &Params::new(), &SrcSetOptions::new())
        .unwrap();
    for (line, width) in candidates(&srcset).iter().zip(widths::TARGET_WIDTHS) {
        assert_eq!(
            *line,
            format!("https://demos.imgix.net/image.jpg?w={} {}w", width, width)
        );
    }
}

#[test]
fn test_width_param_selects_dpr_strategy() {
    let params = Params::new().set("w", 640);
    let srcset = builder()
        .create_srcset("image.jpg", &params, &SrcSetOptions::new())
        .unwrap();

    let expected = "\
https://demos.imgix.net/image.jpg?dpr=1&q=75&w=640 1x,
https://demos.imgix.net/image.jpg?dpr=2&q=50&w=640 2x,
https://demos.imgix.net/image.jpg?dpr=3&q=35&w=640 3x,
https://demos.imgix.net/image.jpg?dpr=4&q=23&w=640 4x,
https://demos.imgix.net/image.jpg?dpr=5&q=20&w=640 5x";
    assert_eq!(srcset, expected);
}

#[test]
fn test_height_param_selects_dpr_strategy() {
    let params = Params::new().set("h", 480);
    let srcset = builder()
        .create_srcset("image.jpg", &params, &SrcSetOptions::new())
        .unwrap();
    assert_eq!(candidates(&srcset).len(), 5);
    assert!(srcset.contains("dpr=3"));
}

#[test]
fn test_explicit_widths_selected_first() {
    // widths beat the DPR trigger even when `w` is present
    let params = Params::new().set("w", 640);
    let options = SrcSetOptions::new().with_widths(vec![100, 200, 303]);
    let srcset = builder().create_srcset("image.jpg", &params, &options).unwrap();
    assert!(!srcset.contains("dpr="));
    assert_eq!(candidates(&srcset).len(), 3);
}

// ============================================================================
// Explicit Widths
// ============================================================================

#[test]
fn test_explicit_widths_in_input_order() {
    let options = SrcSetOptions::new().with_widths(vec![100, 200, 303]);
    let srcset = builder()
        .create_srcset("image.jpg", &Params::new(), &options)
        .unwrap();

    let expected = "\
https://demos.imgix.net/image.jpg?w=100 100w,
https://demos.imgix.net/image.jpg?w=200 200w,
https://demos.imgix.net/image.jpg?w=303 303w";
    assert_eq!(srcset, expected);
}

#[test]
fn test_empty_widths_list_rejected() {
    let options = SrcSetOptions::new().with_widths(Vec::<i32>::new());
    assert!(
        builder()
            .create_srcset("image.jpg", &Params::new(), &options)
            .is_err()
    );
}

#[test]
fn test_negative_width_rejected() {
    let options = SrcSetOptions::new().with_widths(vec![100, -200]);
    assert!(
        builder()
            .create_srcset("image.jpg", &Params::new(), &options)
            .is_err()
    );
}

// ============================================================================
// DPR Quality Curve
// ============================================================================

#[test]
fn test_explicit_quality_suppresses_curve() {
    let params = Params::new().set("w", 640).set("q", 100);
    let srcset = builder()
        .create_srcset("image.jpg", &params, &SrcSetOptions::new())
        .unwrap();
    for line in candidates(&srcset) {
        assert!(line.contains("q=100"), "missing explicit q in {}", line);
    }
}

#[test]
fn test_disable_variable_quality_drops_q() {
    let params = Params::new().set("w", 640);
    let options = SrcSetOptions::new().with_variable_quality_disabled(true);
    let srcset = builder().create_srcset("image.jpg", &params, &options).unwrap();
    assert!(!srcset.contains("q="), "unexpected q overlay in {}", srcset);
}

#[test]
fn test_explicit_quality_wins_even_when_curve_disabled() {
    let params = Params::new().set("w", 440).set("q", 99);
    let options = SrcSetOptions::new().with_variable_quality_disabled(true);
    let srcset = builder().create_srcset("image.jpg", &params, &options).unwrap();
    for line in candidates(&srcset) {
        assert!(line.contains("q=99"), "missing explicit q in {}", line);
    }
}

// ============================================================================
// Range Options
// ============================================================================

#[test]
fn test_single_point_range() {
    let options = SrcSetOptions::new().with_start(720).with_stop(720);
    let srcset = builder()
        .create_srcset("image.jpg", &Params::new(), &options)
        .unwrap();
    assert_eq!(srcset, "https://demos.imgix.net/image.jpg?w=720 720w");
}

#[test]
fn test_narrow_range() {
    let options = SrcSetOptions::new().with_start(640).with_stop(720);
    let srcset = builder()
        .create_srcset("image.jpg", &Params::new(), &options)
        .unwrap();

    let expected = "\
https://demos.imgix.net/image.jpg?w=640 640w,
https://demos.imgix.net/image.jpg?w=720 720w";
    assert_eq!(srcset, expected);
}

#[test]
fn test_custom_tolerance() {
    let options = SrcSetOptions::new()
        .with_start(100)
        .with_stop(108)
        .with_tol(0.01);
    let srcset = builder()
        .create_srcset("image.jpg", &Params::new(), &options)
        .unwrap();
    let widths: Vec<&str> = candidates(&srcset)
        .iter()
        .map(|line| line.rsplit_once(' ').unwrap().1)
        .collect();
    assert_eq!(widths, vec!["100w", "102w", "104w", "106w", "108w"]);
}

#[test]
fn test_zero_start_option_rejected() {
    let options = SrcSetOptions::new().with_start(0);
    assert!(
        builder()
            .create_srcset("image.jpg", &Params::new(), &options)
            .is_err()
    );
}

#[test]
fn test_sub_floor_tolerance_rejected() {
    let options = SrcSetOptions::new().with_tol(0.001);
    assert!(
        builder()
            .create_srcset("image.jpg", &Params::new(), &options)
            .is_err()
    );
}

// ============================================================================
// target_widths Utility
// ============================================================================

#[test]
fn test_target_widths_default_properties() {
    let series = target_widths(100, 8192, 0.08).unwrap();
    assert_eq!(series.len(), 31);
    assert_eq!(series[0], 100);
    assert_eq!(series[30], 8192);
    for pair in series.windows(2) {
        assert!(pair[0] < pair[1], "series must be strictly increasing");
        assert!(f64::from(pair[1]) / f64::from(pair[0]) < 1.18);
    }
}

#[test]
fn test_target_widths_degenerate_point() {
    for x in [1, 100, 8192] {
        assert_eq!(target_widths(x, x, 0.08).unwrap(), vec![x]);
    }
}

#[test]
fn test_target_widths_huge_tolerance() {
    assert_eq!(target_widths(100, 8192, 1_000_000.0).unwrap(), vec![100, 8192]);
}

// ============================================================================
// Signing and Library Parameter in Srcsets
// ============================================================================

#[test]
fn test_every_candidate_is_signed() {
    let signed = builder().with_sign_key("test1234");
    let srcset = signed
        .create_srcset("image.jpg", &Params::new(), &SrcSetOptions::new())
        .unwrap();
    for line in candidates(&srcset) {
        assert!(line.contains("s="), "unsigned candidate: {}", line);
    }
}

#[test]
fn test_every_candidate_carries_library_param() {
    let builder = UrlBuilder::new("demos.imgix.net").unwrap();
    let params = Params::new().set("w", 640);
    let srcset = builder
        .create_srcset("image.jpg", &params, &SrcSetOptions::new())
        .unwrap();
    for line in candidates(&srcset) {
        assert!(line.contains("ixlib=rust-"), "missing ixlib: {}", line);
    }
}

#[test]
fn test_base_params_never_mutated_across_candidates() {
    let params = Params::new().set("w", 640);
    builder()
        .create_srcset("image.jpg", &params, &SrcSetOptions::new())
        .unwrap();
    assert_eq!(params.len(), 1);
    assert!(!params.contains("dpr"));
    assert!(!params.contains("q"));
}

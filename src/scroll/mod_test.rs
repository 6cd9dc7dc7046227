use super::*;
use crate::consts::SCROLL_OFFSET_PX;

#[test]
fn fragment_target_strips_hash() {
    assert_eq!(fragment_target("#servicios"), Some("servicios"));
    assert_eq!(fragment_target("#contacto-form"), Some("contacto-form"));
}

#[test]
fn bare_hash_has_no_target() {
    assert_eq!(fragment_target("#"), None);
}

#[test]
fn non_fragment_href_has_no_target() {
    assert_eq!(fragment_target("/about#team"), None);
    assert_eq!(fragment_target("https://example.com/#x"), None);
    assert_eq!(fragment_target(""), None);
}

#[test]
fn plan_subtracts_header_and_offset() {
    let req = plan_scroll(1200.0, 80.0, SCROLL_OFFSET_PX, false);
    assert_eq!(req, ScrollRequest { top: 1100.0, motion: ScrollMotion::Smooth });
}

#[test]
fn plan_without_header_uses_offset_only() {
    assert_eq!(plan_scroll(500.0, 0.0, 20.0, false).top, 480.0);
}

#[test]
fn reduced_motion_jumps_instantly() {
    let req = plan_scroll(1200.0, 80.0, 20.0, true);
    assert_eq!(req.motion, ScrollMotion::Instant);
    assert_eq!(req.top, 1100.0);
}

#[test]
fn target_near_top_may_plan_negative_position() {
    assert_eq!(plan_scroll(10.0, 80.0, 20.0, false).top, -90.0);
}

//! Proximity volume tests built from parsed annotations.

use marginalia_engine::{manhattan_distance, playback_volume};
use marginalia_parser::parse;

#[test]
fn tagged_sound_fades_toward_silence() {
    let page = parse("<Sound: waterfall, 80, 10>");
    let spec = page.sound_spec.expect("sound tag parsed");

    let near = playback_volume(&spec, manhattan_distance((0, 0), (1, 0)));
    let far = playback_volume(&spec, manhattan_distance((0, 0), (4, 4)));
    let gone = playback_volume(&spec, manhattan_distance((0, 0), (8, 8)));

    assert_eq!(near, 80);
    assert!(far < near && far > 0);
    assert_eq!(gone, 0);
}

#[test]
fn volume_never_exceeds_max() {
    let page = parse("<Sound: hum, 55, 3>");
    let spec = page.sound_spec.expect("sound tag parsed");

    for distance in 0..=10 {
        let volume = playback_volume(&spec, distance);
        assert!(volume <= 55, "distance {distance} gave volume {volume}");
        assert!(volume >= 0);
    }
}

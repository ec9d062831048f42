use remix_service_client::RemixRequest;
use remix_session_model::{
    ChromaKey, EditSession, OverlayInstance, SettingsPatch, TextPosition, VideoState,
};

fn session_with_video() -> EditSession {
    let mut session = EditSession::new();
    session.load_video(VideoState {
        video_id: "ab12cd34".to_string(),
        filename: "ab12cd34.mp4".to_string(),
        preview_url: Some("http://localhost:8000/api/download/preview/ab12cd34".to_string()),
        title: Some("Video".to_string()),
        duration_secs: Some(34.2),
    });
    session
}

#[test]
fn multi_overlay_request_matches_service_contract() {
    let mut session = session_with_video();
    session.push_overlay(OverlayInstance {
        asset_id: "dino".to_string(),
        x: 12.5,
        y: 40.0,
        scale: 0.3,
        chroma: ChromaKey::Green,
    });
    session.push_overlay(OverlayInstance {
        asset_id: "logo".to_string(),
        x: 0.0,
        y: 0.0,
        scale: 0.1,
        chroma: ChromaKey::None,
    });
    session.apply(SettingsPatch {
        audio_id: Some(Some("beat.mp3".to_string())),
        remove_original_audio: Some(true),
        text_overlay: Some("POV: it works".to_string()),
        text_position: Some(TextPosition::BottomCenter),
        text_font_size: Some(64),
        trim_start: Some(1.5),
        trim_end: Some(Some(20.0)),
        brightness: Some(10),
        contrast: Some(-5),
        saturation: Some(0),
        playback_speed: Some(1.25),
        ..Default::default()
    });

    let request = RemixRequest::from_session(&session).unwrap();
    let actual = serde_json::to_value(&request).unwrap();

    let expected = serde_json::json!({
        "video_id": "ab12cd34",
        "overlays": [
            {"id": "dino", "x": 12.5, "y": 40.0, "scale": 0.3,
             "remove_green_screen": true, "remove_black_screen": false},
            {"id": "logo", "x": 0.0, "y": 0.0, "scale": 0.1,
             "remove_green_screen": false, "remove_black_screen": false}
        ],
        "overlay_id": null,
        "overlay_position": "bottom-right",
        "overlay_x": null,
        "overlay_y": null,
        "overlay_scale": 0.25,
        "remove_green_screen": true,
        "remove_black_screen": false,
        "audio_id": "beat.mp3",
        "remove_original_audio": true,
        "text_overlay": "POV: it works",
        "text_position": "bottom-center",
        "text_x": null,
        "text_y": null,
        "text_font_size": 64,
        "trim_start": 1.5,
        "trim_end": 20.0,
        "brightness": 10,
        "contrast": -5,
        "saturation": 0,
        "playback_speed": 1.25
    });

    assert_eq!(actual, expected);
}

#[test]
fn legacy_request_matches_service_contract() {
    let mut session = session_with_video();
    session.stage_overlay("dino");
    session.apply(SettingsPatch {
        overlay_x: Some(75.0),
        overlay_y: Some(85.0),
        overlay_scale: Some(0.6),
        chroma: Some(ChromaKey::Black),
        trim_start: Some(10.0),
        ..Default::default()
    });

    let request = RemixRequest::from_session(&session).unwrap();
    let actual = serde_json::to_value(&request).unwrap();

    assert_eq!(actual["overlays"], serde_json::Value::Null);
    assert_eq!(actual["overlay_id"], "dino");
    assert_eq!(actual["overlay_x"], 75.0);
    assert_eq!(actual["overlay_y"], 85.0);
    assert_eq!(actual["overlay_scale"], 0.6);
    assert_eq!(actual["remove_green_screen"], false);
    assert_eq!(actual["remove_black_screen"], true);
    assert_eq!(actual["trim_start"], 10.0);
    assert_eq!(actual["trim_end"], serde_json::Value::Null);
}

#[test]
fn request_body_roundtrips_through_json() {
    let mut session = session_with_video();
    session.stage_overlay("dino");

    let request = RemixRequest::from_session(&session).unwrap();
    let text = serde_json::to_string(&request).unwrap();
    let back: RemixRequest = serde_json::from_str(&text).unwrap();
    assert_eq!(back.video_id, request.video_id);
    assert_eq!(back.overlay_id, request.overlay_id);
    assert_eq!(back.overlay_scale, request.overlay_scale);
}

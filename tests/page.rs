//! Seek page rendering integration tests.

use seekbar::{ClipInfo, DisplayField, FrameRate, Panel, ScrubberConfig, SeekPage, SeekbarError};

fn ntsc_clip() -> ClipInfo {
    ClipInfo::new("shots/take 2.mov", "29.97".parse::<FrameRate>().unwrap(), 17_982)
        .unwrap()
        .with_geometry(720, 480)
        .with_aspect_ratio(4.0 / 3.0)
}

#[test]
fn page_sets_scrubber_globals() {
    let clip = ntsc_clip();
    let html = SeekPage::new(&clip, &ScrubberConfig::new()).render();

    assert!(html.contains("var fps=29.97;"));
    assert!(html.contains("var lastframe=17981;"));
    assert!(html.contains("var fileid='shots%2Ftake%202.mov';"));
    assert!(html.contains("var base_url='/';"));
    assert!(html.contains("src=\"/seek.js\""));
}

#[test]
fn page_describes_clip() {
    let clip = ntsc_clip();
    let html = SeekPage::new(&clip, &ScrubberConfig::new()).render();

    assert!(html.contains("<em>Geometry</em>: 720x480"));
    assert!(html.contains("<em>Aspect-Ratio</em>: 1.333"));
    assert!(html.contains("<em>Framerate</em>: 29.97"));
    assert!(html.contains("<em>Duration</em>: 00:10:00:00"));
}

#[test]
fn page_contains_every_element_the_scrubber_uses() {
    let clip = ntsc_clip();
    let html = SeekPage::new(&clip, &ScrubberConfig::new()).render();

    let mut ids: Vec<&str> = vec!["slider", "knob", "sframe", "numsteps"];
    ids.extend(DisplayField::ALL.map(DisplayField::element_id));
    ids.push(Panel::Setup.element_id());
    ids.push(Panel::Active.element_id());

    for id in ids {
        assert!(html.contains(&format!("id=\"{id}\"")), "missing #{id}");
    }
}

#[test]
fn page_opens_a_third_of_the_way_in() {
    let clip = ntsc_clip();
    let html = SeekPage::new(&clip, &ScrubberConfig::new()).render();

    assert!(html.contains("setslider(5994);"));
    assert!(html.contains("settc(5994);"));
    assert!(html.contains("seek('shots%2Ftake%202.mov',5994);"));
}

#[test]
fn page_follows_configured_track_width() {
    let clip = ntsc_clip();
    let config = ScrubberConfig::new().with_track_width(640).with_default_step_count(20);
    let html = SeekPage::new(&clip, &config).render();

    assert!(html.contains("width:640px;"));
    assert!(html.contains("value=\"20\""));
}

#[test]
fn page_options() {
    let clip = ntsc_clip();
    let config = ScrubberConfig::new();
    let html = SeekPage::new(&clip, &config)
        .with_title("take 2")
        .with_script_url("/static/seek.js")
        .with_footer("framesrv at localhost:1554")
        .render();

    assert!(html.contains("<title>take 2</title>"));
    assert!(html.contains("src=\"/static/seek.js\""));
    assert!(html.contains("framesrv at localhost:1554"));
}

#[test]
fn page_escapes_configured_text() {
    let clip = ntsc_clip();
    let config = ScrubberConfig::new().with_base_url("/o'neil/</script>\\");
    let html = SeekPage::new(&clip, &config)
        .with_title("<b>take</b> & \"2\"")
        .with_footer("<script>alert(1)</script>")
        .render();

    assert!(html.contains(r"var base_url='/o\'neil/\x3c/script\x3e\\';"));
    assert!(html.contains("<title>&lt;b&gt;take&lt;/b&gt; &amp; &quot;2&quot;</title>"));
    assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    assert!(!html.contains("<script>alert"));
    assert_eq!(html.matches("</script>").count(), 3);
}

#[test]
fn page_is_written_to_disk() {
    let temporary_directory = tempfile::tempdir().expect("Failed to create temp dir");
    let path = temporary_directory.path().join("seek.html");

    let clip = ntsc_clip();
    let config = ScrubberConfig::new();
    let page = SeekPage::new(&clip, &config);
    page.write_to(&path).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, page.render());
}

#[test]
fn writing_into_missing_directory_fails() {
    let temporary_directory = tempfile::tempdir().expect("Failed to create temp dir");
    let path = temporary_directory.path().join("missing").join("seek.html");

    let clip = ntsc_clip();
    let config = ScrubberConfig::new();
    let result = SeekPage::new(&clip, &config).write_to(&path);
    assert!(matches!(result, Err(SeekbarError::IoError(_))));
}

// ── ClipInfo ───────────────────────────────────────────────────────

#[test]
fn empty_clip_is_rejected() {
    let result = ClipInfo::new("empty.mov", FrameRate::new(25, 1).unwrap(), 0);
    assert!(matches!(result, Err(SeekbarError::EmptyClip)));
}

#[test]
fn clip_frame_checks() {
    let clip = ClipInfo::new("a.mov", FrameRate::new(25, 1).unwrap(), 100).unwrap();
    assert_eq!(clip.check_frame(99).unwrap(), 99);

    let error = clip.check_frame(100).unwrap_err();
    assert!(
        error.to_string().contains("out of range"),
        "Error message should mention out of range: {error}",
    );
}

#[test]
fn geometry_sets_aspect_ratio() {
    let clip = ClipInfo::new("a.mov", FrameRate::new(25, 1).unwrap(), 100)
        .unwrap()
        .with_geometry(1920, 1080);
    assert!((clip.aspect_ratio - 16.0 / 9.0).abs() < 1e-9);
}

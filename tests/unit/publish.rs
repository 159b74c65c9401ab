use super::*;

#[test]
fn page_links_the_conventional_video_path() {
    let page = DownloadPage::for_config(&RenderConfig::default(), 30, true);
    assert_eq!(page.href, "/media/videos/main/720p16/StickmanFight.mp4");
    assert_eq!(page.download_name, "stickman_fight.mp4");
    assert_eq!(page.info_line, "16 FPS | 30 Seconds | With Sound Effects");

    let html = page.to_html();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains(
        r#"<a href="/media/videos/main/720p16/StickmanFight.mp4" download="stickman_fight.mp4""#
    ));
    assert!(html.contains("&quot;The Light Stick vs. The Bow&quot;"));
    assert!(html.contains("16 FPS | 30 Seconds | With Sound Effects"));
}

#[test]
fn silent_page_drops_sound_note() {
    let page = DownloadPage::for_config(&RenderConfig::default(), 12, false);
    assert!(page.info_line.ends_with("Silent Cut"));
    assert!(!page.notes.iter().any(|n| n.contains("sound")));
}

#[test]
fn markup_in_fields_is_escaped() {
    assert_eq!(escape_html(r#"<b>"x" & 'y'</b>"#), "&lt;b&gt;&quot;x&quot; &amp; &#39;y&#39;&lt;/b&gt;");
}

#[test]
fn publish_finds_rendered_video() {
    let dir = tempfile::tempdir().unwrap();
    let config = RenderConfig::default();
    let video = dir.path().join(config.video_path());
    std::fs::create_dir_all(video.parent().unwrap()).unwrap();
    std::fs::write(&video, b"mp4").unwrap();

    let page = DownloadPage::for_config(&config, 30, true);
    let out = publish(&config, &page, dir.path()).unwrap();
    assert_eq!(out.video.as_deref(), Some(video.as_path()));
    assert!(out.media_listing.is_empty());
    assert_eq!(std::fs::read_to_string(&out.page).unwrap(), page.to_html());
}

#[test]
fn missing_video_still_writes_page_and_lists_media() {
    let dir = tempfile::tempdir().unwrap();
    let config = RenderConfig::default();
    let stray = dir.path().join("media/videos/main/480p15/StickmanFight.mp4");
    std::fs::create_dir_all(stray.parent().unwrap()).unwrap();
    std::fs::write(&stray, b"mp4").unwrap();

    let page = DownloadPage::for_config(&config, 30, true);
    let out = publish(&config, &page, dir.path()).unwrap();
    assert!(out.video.is_none());
    assert_eq!(out.media_listing, vec![stray]);
    assert!(out.page.is_file());
}

#[test]
fn missing_media_dir_is_not_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let config = RenderConfig::default();
    let page = DownloadPage::for_config(&config, 30, true);
    let out = publish(&config, &page, dir.path()).unwrap();
    assert!(out.video.is_none());
    assert!(out.media_listing.is_empty());
    assert!(out.page.is_file());
}

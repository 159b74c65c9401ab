//! Static download page for the finished video.

use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::{config::RenderConfig, foundation::error::SketchResult};

/// Everything the download page says.
#[derive(Clone, Debug, PartialEq)]
pub struct DownloadPage {
    pub title: String,
    pub headline: String,
    pub tagline: String,
    pub info_line: String,
    /// Link target, relative to the served root.
    pub href: String,
    /// File name suggested to the browser.
    pub download_name: String,
    pub notes: Vec<String>,
}

impl DownloadPage {
    /// Page for `config`'s video, advertising `seconds` of runtime.
    pub fn for_config(config: &RenderConfig, seconds: u32, with_sound: bool) -> Self {
        let sound = if with_sound {
            "With Sound Effects"
        } else {
            "Silent Cut"
        };
        let mut notes = Vec::new();
        if with_sound {
            notes.push("Video includes sound effects".to_string());
        }
        notes.push("8 scenes + bonus selfie frame".to_string());
        notes.push("\"New aesthetic unlocked.\"".to_string());

        Self {
            title: "Download Stickman Video".to_string(),
            headline: "Your Stickman Video is Ready!".to_string(),
            tagline: "\"The Light Stick vs. The Bow\"".to_string(),
            info_line: format!("{} FPS | {seconds} Seconds | {sound}", config.frame_rate),
            href: href_for(&config.video_path()),
            download_name: format!("{}.mp4", config.output_file),
            notes,
        }
    }

    pub fn to_html(&self) -> String {
        let notes = self
            .notes
            .iter()
            .map(|n| escape_html(n))
            .collect::<Vec<_>>()
            .join("<br>\n      ");
        format!(
            r#"<!DOCTYPE html>
<html>
<head>
  <title>{title}</title>
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <style>
    body {{
      font-family: Arial, sans-serif;
      text-align: center;
      padding: 20px;
      background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
      color: white;
      min-height: 100vh;
      margin: 0;
      display: flex;
      justify-content: center;
      align-items: center;
    }}
    .container {{
      background: rgba(255,255,255,0.1);
      backdrop-filter: blur(10px);
      padding: 40px;
      border-radius: 20px;
      box-shadow: 0 20px 60px rgba(0,0,0,0.3);
      max-width: 600px;
    }}
    .download-btn {{
      background: #4A90E2;
      color: white;
      padding: 15px 40px;
      text-decoration: none;
      border-radius: 50px;
      font-size: 20px;
      font-weight: bold;
      display: inline-block;
      margin: 20px 0;
    }}
    .info {{
      margin-top: 30px;
      color: rgba(255,255,255,0.8);
      font-size: 14px;
    }}
  </style>
</head>
<body>
  <div class="container">
    <h1>{headline}</h1>
    <p style="font-size: 18px; margin-bottom: 30px;">
      {tagline}<br>
      <span style="font-size: 14px;">{info}</span>
    </p>
    <a href="{href}" download="{download}" class="download-btn">Download Video</a>
    <div class="info">
      {notes}
    </div>
  </div>
</body>
</html>
"#,
            title = escape_html(&self.title),
            headline = escape_html(&self.headline),
            tagline = escape_html(&self.tagline),
            info = escape_html(&self.info_line),
            href = escape_html(&self.href),
            download = escape_html(&self.download_name),
        )
    }
}

/// Result of [`publish`].
#[derive(Clone, Debug)]
pub struct Published {
    pub page: PathBuf,
    /// The rendered video, if it was where the renderer promised.
    pub video: Option<PathBuf>,
    /// Files found under the media directory when the video was missing.
    pub media_listing: Vec<PathBuf>,
}

/// Write `index.html` into `out_dir`.
///
/// `config.video_path()` is resolved against `out_dir`. A missing video is not an error: the media
/// tree is logged to help find what the renderer actually wrote, and the page is written anyway.
#[tracing::instrument(skip(page), fields(out_dir = %out_dir.display()))]
pub fn publish(config: &RenderConfig, page: &DownloadPage, out_dir: &Path) -> SketchResult<Published> {
    let expected = out_dir.join(config.video_path());
    let (video, media_listing) = if expected.is_file() {
        tracing::info!(video = %expected.display(), "found rendered video");
        (Some(expected), Vec::new())
    } else {
        tracing::warn!(
            expected = %expected.display(),
            "rendered video not found, listing media directory"
        );
        (None, list_media(&out_dir.join(&config.media_dir)))
    };

    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("create publish dir '{}'", out_dir.display()))?;
    let page_path = out_dir.join("index.html");
    std::fs::write(&page_path, page.to_html())
        .with_context(|| format!("write download page '{}'", page_path.display()))?;
    tracing::info!(page = %page_path.display(), "download page written");

    Ok(Published {
        page: page_path,
        video,
        media_listing,
    })
}

fn list_media(root: &Path) -> Vec<PathBuf> {
    if !root.exists() {
        tracing::warn!(root = %root.display(), "media directory does not exist");
        return Vec::new();
    }
    let mut out = Vec::new();
    for entry in walkdir::WalkDir::new(root).sort_by_file_name() {
        match entry {
            Ok(e) => {
                tracing::warn!(depth = e.depth(), path = %e.path().display(), "media entry");
                if e.file_type().is_file() {
                    out.push(e.into_path());
                }
            }
            Err(err) => tracing::warn!(%err, "unreadable media entry"),
        }
    }
    out
}

fn href_for(path: &Path) -> String {
    let parts: Vec<_> = path
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    format!("/{}", parts.join("/"))
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
#[path = "../tests/unit/publish.rs"]
mod tests;

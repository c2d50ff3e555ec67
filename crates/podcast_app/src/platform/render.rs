//! Plain-text rendering of validated feed data.

use std::fmt::{self, Write};

use feed_core::{slug_for, Episode, Feed};

const DATE_FORMAT: &str = "%B %-d, %Y";

pub(crate) fn episode_list(out: &mut impl Write, episodes: &[Episode]) -> fmt::Result {
    for episode in episodes {
        writeln!(
            out,
            "{:<18}  {}  ({})",
            display_date(episode),
            episode.title,
            slug_for(episode)
        )?;
    }
    if episodes.is_empty() {
        out.write_str("No episodes published yet.\n")?;
    }
    Ok(())
}

pub(crate) fn episode_detail(out: &mut impl Write, episode: &Episode) -> fmt::Result {
    let ext = &episode.extension;
    writeln!(out, "{}", episode.title)?;
    writeln!(out, "{}", display_date(episode))?;
    if let Some(number) = ext.itunes_episode {
        writeln!(out, "Episode {number}")?;
    }
    writeln!(out, "Duration: {}", ext.duration_hhmmss)?;
    writeln!(out, "Link: {}", ext.web_url)?;
    if let Some(attachment) = episode.primary_attachment() {
        writeln!(out, "Audio: {} ({})", attachment.url, attachment.mime_type)?;
    }
    if let Some(video_id) = episode.youtube_video_id() {
        writeln!(out, "Video: https://www.youtube.com/embed/{video_id}")?;
    }
    if let Some(spotify) = ext.spotify_url.as_deref() {
        writeln!(out, "Spotify: {spotify}")?;
    }
    let summary = episode.summary();
    if !summary.is_empty() {
        writeln!(out, "\n{summary}")?;
    }
    Ok(())
}

pub(crate) fn feed_overview(out: &mut impl Write, feed: &Feed) -> fmt::Result {
    writeln!(out, "{}", feed.title)?;
    writeln!(out, "{}", feed.description)?;
    let authors: Vec<&str> = feed.authors.iter().map(|a| a.name.as_str()).collect();
    if !authors.is_empty() {
        writeln!(out, "By {}", authors.join(", "))?;
    }
    writeln!(out, "Episodes: {}", feed.items.len())?;

    for category in &feed.extension.categories {
        let children: Vec<&str> = category.children().iter().map(|c| c.name.as_str()).collect();
        if children.is_empty() {
            writeln!(out, "Category: {}", category.name())?;
        } else {
            writeln!(out, "Category: {} > {}", category.name(), children.join(", "))?;
        }
    }
    for method in feed.extension.subscribe_methods.iter().filter(|m| m.enabled) {
        writeln!(out, "Subscribe ({}): {}", method.name, method.url)?;
    }
    Ok(())
}

fn display_date(episode: &Episode) -> String {
    match episode.published_at() {
        Some(published) => published.format(DATE_FORMAT).to_string(),
        None => episode.extension.date_published_short.clone(),
    }
}

#![allow(dead_code)]

use serde_json::{json, Value};

pub fn item(id: &str, web_url: &str) -> Value {
    json!({
        "id": id,
        "title": format!("Episode {id}"),
        "attachments": [
            {
                "url": format!("https://cdn.example.com/{id}.mp3"),
                "mime_type": "audio/mpeg",
                "size_in_byte": 31_457_280,
                "duration_in_seconds": 1_964
            }
        ],
        "url": web_url,
        "content_html": "<p>Show notes</p>",
        "content_text": "First paragraph.\n\nSecond paragraph.",
        "date_published": "2024-03-01T09:30:00.000Z",
        "_microfeed": {
            "is_audio": true,
            "is_document": false,
            "is_external_url": false,
            "is_video": false,
            "is_image": false,
            "web_url": web_url,
            "json_url": format!("https://feed.example.com/i/{id}/json"),
            "rss_url": format!("https://feed.example.com/i/{id}/rss"),
            "guid": id,
            "status": "published",
            "duration_hhmmss": "00:32:44",
            "date_published_short": "Fri Mar 01 2024",
            "date_published_ms": 1_709_285_400_000_i64
        }
    })
}

pub fn feed(items: Vec<Value>) -> Value {
    json!({
        "version": "https://jsonfeed.org/version/1.1",
        "title": "Trail Talk",
        "home_page_url": "https://feed.example.com",
        "feed_url": "https://feed.example.com/json",
        "description": "Conversations from the trail",
        "icon": "https://feed.example.com/icon.png",
        "favicon": "https://feed.example.com/favicon.png",
        "authors": [{ "name": "Sam Rivera" }],
        "language": "en-us",
        "items": items,
        "_microfeed": {
            "microfeed_version": "0.1.2",
            "base_url": "https://feed.example.com",
            "categories": [
                { "name": "Sports", "categories": [{ "name": "Running" }] },
                { "name": "Health & Fitness" }
            ],
            "subscribe_methods": [
                {
                    "name": "RSS",
                    "type": "rss",
                    "url": "https://feed.example.com/rss",
                    "image": "https://feed.example.com/rss.png",
                    "enabled": true,
                    "editable": false,
                    "id": "rss-1"
                }
            ],
            "description_text": "Conversations from the trail",
            "itunes:title": "Trail Talk",
            "copyright": "2024 Trail Talk",
            "itunes:type": "episodic",
            "items_sort_order": "newest_first"
        }
    })
}

pub fn standard_feed() -> Value {
    feed(vec![
        item("abc123", "https://feed.example.com/i/first-steps-abc123"),
        item("def456", "https://feed.example.com/i/hill-repeats-def456"),
        item("ghi789", "https://feed.example.com/i/long-run-ghi789"),
    ])
}

/// Mutable access to a nested field, panicking if the path does not exist.
pub fn at<'a>(value: &'a mut Value, pointer: &str) -> &'a mut Value {
    value
        .pointer_mut(pointer)
        .unwrap_or_else(|| panic!("fixture has no value at {pointer}"))
}

pub fn remove(value: &mut Value, pointer: &str, key: &str) {
    at(value, pointer)
        .as_object_mut()
        .expect("object")
        .remove(key)
        .unwrap_or_else(|| panic!("fixture has no key {key} at {pointer}"));
}

//! Create and edit forms.
//!
//! Field names match the keys the submission whitelists accept, so a form
//! posted back unchanged round-trips through the edit handler.

use std::fmt::Write as _;

use axum::response::Html;

use super::{escape, layout};
use crate::domain::genres::{self, GENRE_CHOICES};
use crate::domain::submission::CHECKED;
use crate::domain::{ArtistId, ArtistProfile, VenueId, VenueProfile};

fn text_input(name: &str, label: &str, value: Option<&str>, required: bool) -> String {
    format!(
        "<label>{label}<input type=\"text\" name=\"{name}\" value=\"{}\"{}></label>",
        escape(value.unwrap_or_default()),
        if required { " required" } else { "" }
    )
}

fn genre_select(selected: &str) -> String {
    let chosen: Vec<&str> = genres::split(selected).collect();
    let mut out = String::from("<label>Genres<select name=\"genres\" multiple>");
    for choice in GENRE_CHOICES {
        let _ = write!(
            out,
            "<option value=\"{choice}\"{}>{choice}</option>",
            if chosen.contains(choice) { " selected" } else { "" }
        );
    }
    out.push_str("</select></label>");
    out
}

fn checkbox(name: &str, label: &str, checked: bool) -> String {
    format!(
        "<label><input type=\"checkbox\" name=\"{name}\" value=\"{CHECKED}\"{}> {label}</label>",
        if checked { " checked" } else { "" }
    )
}

fn form_page(title: &str, action: &str, fields: &str) -> Html<String> {
    let body = format!(
        "<h1>{}</h1><form method=\"post\" action=\"{}\">{fields}\
         <button type=\"submit\">{}</button></form>",
        escape(title),
        escape(action),
        escape(title)
    );
    layout(title, None, &body)
}

fn venue_fields(profile: &VenueProfile) -> String {
    [
        text_input("name", "Name", Some(profile.name.as_str()), true),
        text_input("city", "City", Some(profile.city.as_str()), true),
        text_input("state", "State", Some(profile.state.as_str()), true),
        text_input("address", "Address", Some(profile.address.as_str()), true),
        text_input("phone", "Phone", profile.phone.as_deref(), false),
        genre_select(&profile.genres),
        text_input("image_link", "Image link", profile.image_link.as_deref(), false),
        text_input("facebook_link", "Facebook link", profile.facebook_link.as_deref(), false),
        text_input("website", "Website", profile.website.as_deref(), false),
        checkbox("seeking_talent", "Seeking talent", profile.seeking_talent),
        text_input(
            "seeking_description",
            "Seeking description",
            profile.seeking_description.as_deref(),
            false,
        ),
    ]
    .concat()
}

fn artist_fields(profile: &ArtistProfile) -> String {
    [
        text_input("name", "Name", Some(profile.name.as_str()), true),
        text_input("city", "City", Some(profile.city.as_str()), true),
        text_input("state", "State", Some(profile.state.as_str()), true),
        text_input("phone", "Phone", profile.phone.as_deref(), false),
        genre_select(&profile.genres),
        text_input("image_link", "Image link", profile.image_link.as_deref(), false),
        text_input("facebook_link", "Facebook link", profile.facebook_link.as_deref(), false),
        text_input("website", "Website", profile.website.as_deref(), false),
        checkbox("seeking_venue", "Seeking venue", profile.seeking_venue),
        text_input(
            "seeking_description",
            "Seeking description",
            profile.seeking_description.as_deref(),
            false,
        ),
    ]
    .concat()
}

/// Blank venue form.
#[must_use]
pub fn new_venue() -> Html<String> {
    form_page(
        "List a new venue",
        "/venues/create",
        &venue_fields(&VenueProfile::default()),
    )
}

/// Venue form pre-filled with the stored values.
#[must_use]
pub fn edit_venue(id: VenueId, profile: &VenueProfile) -> Html<String> {
    form_page(
        &format!("Edit venue {}", profile.name),
        &format!("/venues/{id}/edit"),
        &venue_fields(profile),
    )
}

/// Blank artist form.
#[must_use]
pub fn new_artist() -> Html<String> {
    form_page(
        "List a new artist",
        "/artists/create",
        &artist_fields(&ArtistProfile::default()),
    )
}

/// Artist form pre-filled with the stored values.
#[must_use]
pub fn edit_artist(id: ArtistId, profile: &ArtistProfile) -> Html<String> {
    form_page(
        &format!("Edit artist {}", profile.name),
        &format!("/artists/{id}/edit"),
        &artist_fields(profile),
    )
}

/// Blank show form.
#[must_use]
pub fn new_show() -> Html<String> {
    let fields = [
        text_input("venue_id", "Venue ID", None, true),
        text_input("artist_id", "Artist ID", None, true),
        "<label>Start time<input type=\"datetime-local\" name=\"start_time\" required></label>"
            .to_string(),
    ]
    .concat();
    form_page("List a new show", "/shows/create", &fields)
}

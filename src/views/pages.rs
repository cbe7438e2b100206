//! Listing, search and detail pages.

use std::fmt::Write as _;

use axum::response::Html;

use super::{DateStyle, Flash, escape, external_link, format_datetime, image, layout};
use crate::domain::{
    Area, ArtistDetail, ArtistShow, ArtistSummary, SearchResults, ShowListing, VenueDetail,
    VenueShow, VenueSummary,
};

/// Landing page, optionally carrying a submission acknowledgment.
#[must_use]
pub fn home(flash: Option<&Flash>) -> Html<String> {
    layout(
        "Home",
        flash,
        r#"<h1>Fyyur</h1>
<p>Find venues and artists, and book the shows that bring them together.</p>
<ul>
    <li><a href="/venues/create">List a new venue</a></li>
    <li><a href="/artists/create">List a new artist</a></li>
    <li><a href="/shows/create">List a new show</a></li>
</ul>"#,
    )
}

fn search_form(action: &str, term: &str) -> String {
    format!(
        r#"<form method="post" action="{action}">
    <input type="search" name="search_term" value="{}" placeholder="Find by name">
    <button type="submit">Search</button>
</form>"#,
        escape(term)
    )
}

fn upcoming_label(count: i64) -> String {
    format!("{count} upcoming show{}", if count == 1 { "" } else { "s" })
}

fn venue_items(venues: &[VenueSummary]) -> String {
    let mut out = String::from("<ul>");
    for venue in venues {
        let _ = write!(
            out,
            "<li><a href=\"/venues/{}\">{}</a> <small>{}</small></li>",
            venue.id,
            escape(&venue.name),
            upcoming_label(venue.num_upcoming_shows)
        );
    }
    out.push_str("</ul>");
    out
}

fn artist_items(artists: &[ArtistSummary]) -> String {
    let mut out = String::from("<ul>");
    for artist in artists {
        let _ = write!(
            out,
            "<li><a href=\"/artists/{}\">{}</a> <small>{}</small></li>",
            artist.id,
            escape(&artist.name),
            upcoming_label(artist.num_upcoming_shows)
        );
    }
    out.push_str("</ul>");
    out
}

/// Venues grouped by city and state.
#[must_use]
pub fn venues(areas: &[Area]) -> Html<String> {
    let mut body = String::from("<h1>Venues</h1>");
    body.push_str(&search_form("/venues/search", ""));
    if areas.is_empty() {
        body.push_str("<p>No venues listed yet.</p>");
    }
    for area in areas {
        let _ = write!(
            body,
            "<section><h3>{}, {}</h3>{}</section>",
            escape(&area.city),
            escape(&area.state),
            venue_items(&area.venues)
        );
    }
    layout("Venues", None, &body)
}

/// Every artist.
#[must_use]
pub fn artists(artists: &[ArtistSummary]) -> Html<String> {
    let mut body = String::from("<h1>Artists</h1>");
    body.push_str(&search_form("/artists/search", ""));
    body.push_str(&artist_items(artists));
    layout("Artists", None, &body)
}

/// Venue search results.
#[must_use]
pub fn search_venues(results: &SearchResults<VenueSummary>, term: &str) -> Html<String> {
    let mut body = search_form("/venues/search", term);
    let _ = write!(
        body,
        "<h3>Number of search results for \"{}\": {}</h3>",
        escape(term),
        results.count
    );
    body.push_str(&venue_items(&results.data));
    layout("Venue search", None, &body)
}

/// Artist search results.
#[must_use]
pub fn search_artists(results: &SearchResults<ArtistSummary>, term: &str) -> Html<String> {
    let mut body = search_form("/artists/search", term);
    let _ = write!(
        body,
        "<h3>Number of search results for \"{}\": {}</h3>",
        escape(term),
        results.count
    );
    body.push_str(&artist_items(&results.data));
    layout("Artist search", None, &body)
}

/// Every show with both sides of the booking.
#[must_use]
pub fn shows(shows: &[ShowListing]) -> Html<String> {
    let mut body = String::from("<h1>Shows</h1><ul class=\"shows\">");
    for show in shows {
        let _ = write!(
            body,
            "<li>{}<h4>{}</h4><p><a href=\"/artists/{}\">{}</a> playing at \
             <a href=\"/venues/{}\">{}</a></p></li>",
            image(show.artist_image_link.as_deref(), &show.artist_name),
            format_datetime(show.start_time, DateStyle::Full),
            show.artist_id,
            escape(&show.artist_name),
            show.venue_id,
            escape(&show.venue_name),
        );
    }
    body.push_str("</ul>");
    layout("Shows", None, &body)
}

fn genre_tags(genres: &[&str]) -> String {
    let mut out = String::from("<p class=\"genres\">");
    for genre in genres {
        let _ = write!(out, "<span class=\"genre\">{}</span> ", escape(genre));
    }
    out.push_str("</p>");
    out
}

fn seeking(flag: bool, label: &str, description: Option<&str>) -> String {
    if flag {
        format!(
            "<div class=\"seeking\"><p>Currently seeking {label}</p><p>{}</p></div>",
            escape(description.unwrap_or_default())
        )
    } else {
        format!("<p class=\"not-seeking\">Not currently seeking {label}</p>")
    }
}

fn venue_show_cards(heading: &str, shows: &[VenueShow]) -> String {
    let mut out = format!("<section><h2>{} {heading}</h2><ul>", shows.len());
    for show in shows {
        let _ = write!(
            out,
            "<li>{}<a href=\"/artists/{}\">{}</a> <time>{}</time></li>",
            image(show.artist_image_link.as_deref(), &show.artist_name),
            show.artist_id,
            escape(&show.artist_name),
            format_datetime(show.start_time, DateStyle::Medium)
        );
    }
    out.push_str("</ul></section>");
    out
}

fn artist_show_cards(heading: &str, shows: &[ArtistShow]) -> String {
    let mut out = format!("<section><h2>{} {heading}</h2><ul>", shows.len());
    for show in shows {
        let _ = write!(
            out,
            "<li>{}<a href=\"/venues/{}\">{}</a> <time>{}</time></li>",
            image(show.venue_image_link.as_deref(), &show.venue_name),
            show.venue_id,
            escape(&show.venue_name),
            format_datetime(show.start_time, DateStyle::Medium)
        );
    }
    out.push_str("</ul></section>");
    out
}

/// Venue detail page with past and upcoming shows.
#[must_use]
pub fn venue(detail: &VenueDetail) -> Html<String> {
    let venue = &detail.venue;
    let profile = &venue.profile;
    let mut body = format!(
        "<h1>{}</h1><p class=\"subtitle\">ID: {}</p>",
        escape(&profile.name),
        venue.id
    );
    body.push_str(&genre_tags(&profile.genre_list()));
    let _ = write!(
        body,
        "<p>{}</p><p>{}, {}</p><p>{}</p>",
        escape(&profile.address),
        escape(&profile.city),
        escape(&profile.state),
        escape(profile.phone.as_deref().unwrap_or("No Phone"))
    );
    body.push_str(&external_link(profile.website.as_deref(), "Website"));
    body.push_str(&external_link(profile.facebook_link.as_deref(), "Facebook"));
    body.push_str(&seeking(
        profile.seeking_talent,
        "talent",
        profile.seeking_description.as_deref(),
    ));
    body.push_str(&image(profile.image_link.as_deref(), &profile.name));
    body.push_str(&venue_show_cards("Upcoming Shows", &detail.shows.upcoming));
    body.push_str(&venue_show_cards("Past Shows", &detail.shows.past));
    let _ = write!(
        body,
        r#"<p><a href="/venues/{id}/edit">Edit venue</a></p>
<button type="button" onclick="fetch('/venues/{id}', {{method: 'DELETE'}}).then(r => {{ if (r.ok) window.location = '/'; }})">Delete venue</button>"#,
        id = venue.id
    );
    layout(&profile.name, None, &body)
}

/// Artist detail page with past and upcoming shows.
#[must_use]
pub fn artist(detail: &ArtistDetail) -> Html<String> {
    let artist = &detail.artist;
    let profile = &artist.profile;
    let mut body = format!(
        "<h1>{}</h1><p class=\"subtitle\">ID: {}</p>",
        escape(&profile.name),
        artist.id
    );
    body.push_str(&genre_tags(&profile.genre_list()));
    let _ = write!(
        body,
        "<p>{}, {}</p><p>{}</p>",
        escape(&profile.city),
        escape(&profile.state),
        escape(profile.phone.as_deref().unwrap_or("No Phone"))
    );
    body.push_str(&external_link(profile.website.as_deref(), "Website"));
    body.push_str(&external_link(profile.facebook_link.as_deref(), "Facebook"));
    body.push_str(&seeking(
        profile.seeking_venue,
        "performance venues",
        profile.seeking_description.as_deref(),
    ));
    body.push_str(&image(profile.image_link.as_deref(), &profile.name));
    body.push_str(&artist_show_cards("Upcoming Shows", &detail.shows.upcoming));
    body.push_str(&artist_show_cards("Past Shows", &detail.shows.past));
    let _ = write!(
        body,
        "<p><a href=\"/artists/{}/edit\">Edit artist</a></p>",
        artist.id
    );
    layout(&profile.name, None, &body)
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::domain::{ArtistId, ShowId, ShowPartition, Venue, VenueId, VenueProfile};

    fn summary(id: i64, name: &str, upcoming: i64) -> VenueSummary {
        VenueSummary {
            id: VenueId::new(id),
            name: name.to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            num_upcoming_shows: upcoming,
        }
    }

    #[test]
    fn search_page_reports_count_and_escapes_term() {
        let results = SearchResults::new(vec![summary(1, "The Musical Hop", 2)]);
        let Html(page) = search_venues(&results, "<hop>");
        assert!(page.contains("Number of search results for \"&lt;hop&gt;\": 1"));
        assert!(page.contains("<a href=\"/venues/1\">The Musical Hop</a>"));
        assert!(page.contains("2 upcoming shows"));
    }

    #[test]
    fn venues_page_lists_each_area() {
        let areas = vec![Area {
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            venues: vec![summary(1, "The Musical Hop", 1), summary(3, "Park Square", 0)],
        }];
        let Html(page) = venues(&areas);
        assert!(page.contains("<h3>San Francisco, CA</h3>"));
        assert!(page.contains("1 upcoming show<"));
        assert!(page.contains("Park Square"));
    }

    #[test]
    fn venue_page_shows_both_partitions() {
        let Some(start) = Utc.with_ymd_and_hms(2019, 5, 21, 21, 30, 0).single() else {
            return;
        };
        let detail = VenueDetail {
            venue: Venue {
                id: VenueId::new(1),
                profile: VenueProfile {
                    name: "The Musical Hop".to_string(),
                    genres: "Jazz,Reggae".to_string(),
                    seeking_talent: true,
                    seeking_description: Some("Looking for locals".to_string()),
                    ..VenueProfile::default()
                },
            },
            shows: ShowPartition {
                past: vec![VenueShow {
                    show_id: ShowId::new(1),
                    artist_id: ArtistId::new(4),
                    artist_name: "Guns N Petals".to_string(),
                    artist_image_link: None,
                    start_time: start,
                }],
                upcoming: Vec::new(),
            },
        };
        let Html(page) = venue(&detail);
        assert!(page.contains("<h2>0 Upcoming Shows</h2>"));
        assert!(page.contains("<h2>1 Past Shows</h2>"));
        assert!(page.contains("<span class=\"genre\">Reggae</span>"));
        assert!(page.contains("Currently seeking talent"));
        assert!(page.contains("No Phone"));
        assert!(page.contains("method: 'DELETE'"));
    }
}

//! Domain layer: records, typed submissions, and the pure operations the
//! handlers compose.
//!
//! Nothing in here touches the database; the persistence layer loads and
//! stores these types, and the service layer wires the two together.

pub mod area;
pub mod artist;
pub mod genres;
pub mod partition;
pub mod record_id;
pub mod search;
pub mod show;
pub mod submission;
pub mod validation;
pub mod venue;

pub use area::{Area, group_by_area};
pub use artist::{Artist, ArtistChanges, ArtistDetail, ArtistProfile, ArtistShow, ArtistSummary};
pub use partition::{Scheduled, ShowPartition};
pub use record_id::{ArtistId, ShowId, VenueId};
pub use search::SearchResults;
pub use show::{NewShow, Show, ShowChanges, ShowDraft, ShowListing};
pub use submission::{FieldMap, Submission};
pub use venue::{Venue, VenueChanges, VenueDetail, VenueProfile, VenueShow, VenueSummary};

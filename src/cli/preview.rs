use tabled::Table;

use crate::{
    error, info, pipeline::GenreFilter, spotify, types::MatchTableRow, warning,
};

/// Runs fetch, classify, and filter and prints what `run` would publish,
/// without creating or modifying any playlist.
pub async fn preview(playlist_id: String, genre: String) {
    let pb = super::progress_spinner("Requesting access token...");
    let token = match spotify::auth::request_access_token().await {
        Ok(token) => token,
        Err(e) => {
            pb.finish_and_clear();
            error!("Failed to acquire access token: {}", e);
        }
    };
    pb.finish_and_clear();

    let mut filter = GenreFilter::new(&genre);

    let pb = super::progress_spinner("Fetching playlist tracks...");
    filter.collect_tracks(&token.access_token, &playlist_id).await;
    pb.finish_and_clear();

    if filter.pair_count() == 0 {
        warning!("Playlist {} yielded no tracks.", playlist_id);
        return;
    }

    let pb = super::progress_spinner(&format!(
        "Checking genres for {} artists...",
        filter.artist_count()
    ));
    filter.classify_artists(&token.access_token).await;
    pb.finish_and_clear();

    let matching = filter.matching_tracks();
    let rows: Vec<MatchTableRow> = filter
        .approved_artists()
        .into_iter()
        .map(|artist| MatchTableRow {
            tracks: filter
                .pairs()
                .iter()
                .filter(|p| p.artist_id == artist.id)
                .count(),
            genres: artist
                .genres
                .iter()
                .take(3)
                .cloned()
                .collect::<Vec<_>>()
                .join(","),
            artist: artist.name,
        })
        .collect();

    if rows.is_empty() {
        warning!(
            "No artists in playlist {} match \"{}\".",
            playlist_id,
            genre
        );
        return;
    }

    let table = Table::new(rows);
    println!("{}", table);
    info!(
        "{} tracks across {} artists would be published.",
        matching.len(),
        filter.approved_count()
    );
}

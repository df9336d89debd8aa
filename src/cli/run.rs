use chrono::Utc;

use crate::{error, info, pipeline::GenreFilter, spotify, success, warning};

pub async fn run(
    playlist_id: String,
    genre: String,
    name: Option<String>,
    description: Option<String>,
    public: bool,
) {
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
        warning!("Playlist {} yielded no tracks. Nothing to do.", playlist_id);
        return;
    }
    info!(
        "Collected {} tracks from {} artists.",
        filter.pair_count(),
        filter.artist_count()
    );

    let pb = super::progress_spinner(&format!(
        "Checking genres for {} artists...",
        filter.artist_count()
    ));
    filter.classify_artists(&token.access_token).await;
    pb.finish_and_clear();
    info!(
        "{} of {} artists match \"{}\".",
        filter.approved_count(),
        filter.artist_count(),
        genre
    );

    let matching = filter.matching_tracks();
    if matching.is_empty() {
        warning!(
            "No tracks in playlist {} match \"{}\". Nothing to publish.",
            playlist_id,
            genre
        );
        return;
    }

    let playlist_name = name.unwrap_or_else(|| format!("only {}", genre));
    let playlist_description = description.unwrap_or_else(|| {
        format!(
            "{} tracks picked from {} on {}",
            genre,
            playlist_id,
            Utc::now().date_naive()
        )
    });

    info!("Creating playlist \"{}\"...", playlist_name);
    let created = match spotify::playlist::create(
        &token.access_token,
        playlist_name,
        playlist_description,
        public,
    )
    .await
    {
        Ok(resp) => resp,
        Err(e) => error!("Failed to create playlist: {}", e),
    };
    success!("Playlist \"{}\" created with id {}.", created.name, created.id);

    match spotify::playlist::add_tracks(&token.access_token, &created.id, &matching).await {
        Ok(batches) => success!(
            "Added {} tracks to \"{}\" in {} batches.",
            matching.len(),
            created.name,
            batches
        ),
        Err(e) => error!("Failed to add tracks to playlist {}: {}", created.id, e),
    }
}

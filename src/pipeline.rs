use std::{
    collections::{HashMap, HashSet},
    sync::Arc,
};

use tokio::sync::Mutex;

use crate::{
    spotify,
    types::{Artist, TrackArtistPair},
    utils, warning,
};

/// Coordinator of the fetch → classify → filter pipeline.
///
/// Owns the track-pair set and the approved-artist map explicitly; nothing
/// in the pipeline lives in ambient module state. Stages run strictly in
/// order: `collect_tracks` populates the pairs single-threaded,
/// `classify_artists` fans out over the distinct artists and folds back
/// behind a join barrier, and `matching_tracks` intersects the two only
/// after classification has fully completed.
pub struct GenreFilter {
    genre: String,
    pairs: HashSet<TrackArtistPair>,
    approved: HashMap<String, Artist>,
}

impl GenreFilter {
    pub fn new(genre: &str) -> Self {
        GenreFilter {
            genre: genre.to_string(),
            pairs: HashSet::new(),
            approved: HashMap::new(),
        }
    }

    /// Inserts one observation; duplicates of the full pair collapse.
    pub fn add_pair(&mut self, pair: TrackArtistPair) -> bool {
        self.pairs.insert(pair)
    }

    pub fn pairs(&self) -> &HashSet<TrackArtistPair> {
        &self.pairs
    }

    pub fn pair_count(&self) -> usize {
        self.pairs.len()
    }

    /// Number of distinct, non-empty artist ids seen so far.
    pub fn artist_count(&self) -> usize {
        utils::unique_artist_ids(&self.pairs).len()
    }

    pub fn approved_count(&self) -> usize {
        self.approved.len()
    }

    /// Walks the source playlist and accumulates its track/artist pairs.
    ///
    /// Page failures are absorbed inside the fetcher; whatever was
    /// collected before a failure is kept.
    pub async fn collect_tracks(&mut self, token: &str, playlist_id: &str) {
        let pairs = spotify::tracks::get_all_playlist_tracks(playlist_id, token).await;
        self.pairs.extend(pairs);
    }

    /// Marks an artist as matching the target genre. Idempotent; the first
    /// record for an id wins.
    pub fn approve_artist(&mut self, artist: Artist) {
        self.approved.entry(artist.id.clone()).or_insert(artist);
    }

    /// Looks up genre tags for every distinct artist, concurrently.
    ///
    /// The distinct artist ids are partitioned across a worker pool sized
    /// from the available execution units; each worker walks its slice
    /// sequentially and inserts matching artists into a shared map. The
    /// stage returns only when every worker has been joined, so downstream
    /// filtering never observes a half-classified set. Individual lookup
    /// failures are logged and leave that artist unapproved.
    pub async fn classify_artists(&mut self, token: &str) {
        let ids: Vec<String> = utils::unique_artist_ids(&self.pairs).into_iter().collect();
        if ids.is_empty() {
            return;
        }

        let workers = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(4);
        let chunk_size = ids.len().div_ceil(workers);

        let approved: Arc<Mutex<HashMap<String, Artist>>> = Arc::new(Mutex::new(HashMap::new()));
        let mut handles = Vec::new();

        for chunk in ids.chunks(chunk_size) {
            let chunk = chunk.to_vec();
            let token = token.to_string();
            let genre = self.genre.clone();
            let approved = Arc::clone(&approved);

            let handle = tokio::spawn(async move {
                for artist_id in chunk {
                    match spotify::artists::get_artist(&artist_id, &token).await {
                        Ok(artist) => {
                            if utils::genre_matches(&artist.genres, &genre) {
                                let mut lock = approved.lock().await;
                                lock.entry(artist.id.clone()).or_insert(artist);
                            }
                        }
                        Err(e) => warning!("Skipping artist {}: {}", artist_id, e),
                    }
                }
            });
            handles.push(handle);
        }

        for handle in handles {
            if let Err(e) = handle.await {
                warning!("Task join error: {}", e);
            }
        }

        let mut lock = approved.lock().await;
        for (id, artist) in lock.drain() {
            self.approved.entry(id).or_insert(artist);
        }
    }

    /// The track uris whose primary artist matched the target genre, sorted
    /// for a stable publish order.
    pub fn matching_tracks(&self) -> Vec<String> {
        let approved_ids: HashSet<String> = self.approved.keys().cloned().collect();
        let mut tracks: Vec<String> = utils::matching_tracks(&self.pairs, &approved_ids)
            .into_iter()
            .collect();
        tracks.sort();
        tracks
    }

    /// The matched artists, sorted by name for display.
    pub fn approved_artists(&self) -> Vec<Artist> {
        let mut artists: Vec<Artist> = self.approved.values().cloned().collect();
        artists.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        artists
    }
}

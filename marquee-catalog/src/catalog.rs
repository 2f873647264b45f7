//! Endpoint operations.

use std::future::Future;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, instrument, warn};

use marquee_core::constants::{PAGES_PER_LOGICAL_PAGE, PROVIDER_LIST_LIMIT, SEARCH_ENRICH_LIMIT};
use marquee_core::error::{MovieError, Result, UpstreamError};
use marquee_core::traits::{CacheStore, MovieSource};
use marquee_core::types::{
    AugmentedMovie, DiscoverFilter, Movie, MovieDetail, MoviePage, MovieWatchProviders,
    PagedMovies, Provider, ProviderList, ReleaseDates, SearchResults, UpstreamRequest, Videos,
};

use crate::config::CatalogConfig;
use crate::detail::{regional_release_date, select_trailer};
use crate::enrich::region_providers;
use crate::fanout::map_isolated;
use crate::keys;
use crate::query::{validate_page, GenreQuery, SearchQuery, ValidSearch};

/// Aggregates upstream data into cached endpoint responses.
///
/// Every public operation returns the exact JSON payload that was cached,
/// so a hit and the miss that populated it are indistinguishable.
pub struct Catalog {
    source: Arc<dyn MovieSource>,
    cache: Arc<dyn CacheStore>,
    config: CatalogConfig,
}

impl Catalog {
    /// Creates a catalog over an upstream source and a cache store.
    pub fn new(
        source: Arc<dyn MovieSource>,
        cache: Arc<dyn CacheStore>,
        config: CatalogConfig,
    ) -> Self {
        Self {
            source,
            cache,
            config,
        }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Returns the cache store.
    pub fn cache(&self) -> &Arc<dyn CacheStore> {
        &self.cache
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // ENDPOINTS
    // ═══════════════════════════════════════════════════════════════════════════

    /// Upstream genre list, verbatim.
    #[instrument(skip(self))]
    pub async fn genres(&self) -> Result<Value> {
        self.cached(keys::GENRES.to_string(), self.load_genres())
            .await
    }

    /// First ten watch providers for the region.
    #[instrument(skip(self))]
    pub async fn providers(&self) -> Result<Value> {
        self.cached(keys::PROVIDERS.to_string(), self.load_providers())
            .await
    }

    /// Top-rated movies of a genre, two upstream pages per logical page,
    /// each enriched with provider data.
    #[instrument(skip(self))]
    pub async fn by_genre(&self, query: &GenreQuery) -> Result<Value> {
        let valid = query.validate()?;
        let filter = DiscoverFilter {
            genre: valid.genre,
            provider: valid.provider,
        };
        let key = keys::genre_listing(valid.genre, valid.provider, valid.page);

        self.cached(key, self.load_genre_listing(filter, valid.page))
            .await
    }

    /// Movies now in theaters (first upstream page, not enriched).
    #[instrument(skip(self))]
    pub async fn now_playing(&self) -> Result<Value> {
        self.cached(
            keys::NOW_PLAYING.to_string(),
            self.load_movie_list(UpstreamRequest::now_playing()),
        )
        .await
    }

    /// Upcoming movies (first upstream page, not enriched).
    #[instrument(skip(self))]
    pub async fn upcoming(&self) -> Result<Value> {
        self.cached(
            keys::UPCOMING.to_string(),
            self.load_movie_list(UpstreamRequest::upcoming()),
        )
        .await
    }

    /// Top-rated movies, two upstream pages per logical page, enriched.
    #[instrument(skip(self))]
    pub async fn popular(&self, page: Option<u32>) -> Result<Value> {
        let page = validate_page(page)?;
        self.cached(keys::popular(page), self.load_popular(page))
            .await
    }

    /// Movie record with its regional release date and trailer.
    #[instrument(skip(self))]
    pub async fn detail(&self, movie_id: u64) -> Result<Value> {
        self.cached(keys::detail(movie_id), self.load_detail(movie_id))
            .await
    }

    /// Free-text search, optionally narrowed by genre and provider.
    ///
    /// A blank or missing query fails before the cache or upstream is touched.
    #[instrument(skip(self))]
    pub async fn search(&self, query: &SearchQuery) -> Result<Value> {
        let search = query.validate()?;
        let key = keys::search(search.query, search.genre, search.provider);
        self.cached(key, self.load_search(search)).await
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // LOADERS (cache misses)
    // ═══════════════════════════════════════════════════════════════════════════

    async fn load_genres(&self) -> Result<Value> {
        let body = self.source.fetch(&UpstreamRequest::genres()).await?;
        info!("Loaded genre list");
        Ok(body)
    }

    async fn load_providers(&self) -> Result<Vec<Provider>> {
        let list: ProviderList = self.fetch_as(&UpstreamRequest::watch_providers()).await?;
        let providers: Vec<Provider> = list.results.into_iter().take(PROVIDER_LIST_LIMIT).collect();
        info!(count = providers.len(), "Loaded provider list");
        Ok(providers)
    }

    async fn load_genre_listing(&self, filter: DiscoverFilter, page: u32) -> Result<PagedMovies> {
        let (movies, upstream_total) = self
            .fetch_double_page(page, |p| UpstreamRequest::discover(&filter, p))
            .await?;
        let total_pages = halve_pages(upstream_total).min(self.config.genre_page_cap);
        let results = self.enrich(movies).await;
        info!(page, total_pages, count = results.len(), "Loaded genre listing");

        Ok(PagedMovies {
            page,
            total_pages,
            results,
        })
    }

    async fn load_movie_list(&self, request: UpstreamRequest) -> Result<Vec<Movie>> {
        let page: MoviePage = self.fetch_as(&request).await?;
        info!(path = %request.path, count = page.results.len(), "Loaded movie list");
        Ok(page.results)
    }

    async fn load_popular(&self, page: u32) -> Result<PagedMovies> {
        let (movies, upstream_total) = self
            .fetch_double_page(page, UpstreamRequest::top_rated)
            .await?;
        let results = self.enrich(movies).await;
        info!(page, count = results.len(), "Loaded popular listing");

        Ok(PagedMovies {
            page,
            total_pages: halve_pages(upstream_total),
            results,
        })
    }

    async fn load_detail(&self, movie_id: u64) -> Result<MovieDetail> {
        let movie_request = UpstreamRequest::movie(movie_id);
        let dates_request = UpstreamRequest::release_dates(movie_id);
        let videos_request = UpstreamRequest::videos(movie_id);

        let (mut movie, dates, videos) = futures::try_join!(
            self.fetch_as::<Movie>(&movie_request),
            self.fetch_as::<ReleaseDates>(&dates_request),
            self.fetch_as::<Videos>(&videos_request),
        )?;

        if let Some(date) = regional_release_date(&dates, &self.config.locale.region) {
            movie.set_release_date(date);
        }
        let trailer = select_trailer(videos.results);
        info!(movie_id, has_trailer = trailer.is_some(), "Loaded movie detail");

        Ok(MovieDetail { movie, trailer })
    }

    async fn load_search(&self, search: ValidSearch<'_>) -> Result<SearchResults> {
        let page: MoviePage = self.fetch_as(&UpstreamRequest::search(search.query)).await?;
        let hits: Vec<Movie> = page
            .results
            .into_iter()
            .filter(|m| search.genre.map_or(true, |g| m.has_genre(g)))
            .take(SEARCH_ENRICH_LIMIT)
            .collect();

        let results: Vec<AugmentedMovie> = self
            .enrich(hits)
            .await
            .into_iter()
            .filter(|m| search.provider.map_or(true, |p| m.offered_by(p)))
            .collect();

        info!(count = results.len(), "Search complete");
        Ok(SearchResults::new(results))
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // ENRICHMENT
    // ═══════════════════════════════════════════════════════════════════════════

    /// Attaches regional providers to each movie.
    ///
    /// A failed lookup leaves that movie with an empty provider list.
    pub async fn enrich(&self, movies: Vec<Movie>) -> Vec<AugmentedMovie> {
        let ids: Vec<u64> = movies.iter().map(|m| m.id).collect();
        let outcomes = map_isolated(ids, self.config.enrichment_concurrency, move |id| {
            self.movie_providers(id)
        })
        .await;

        movies
            .into_iter()
            .zip(outcomes)
            .map(|(movie, outcome)| {
                let providers = outcome.unwrap_or_else(|err| {
                    warn!(movie_id = movie.id, error = %err, "Provider lookup failed, continuing without providers");
                    Vec::new()
                });
                AugmentedMovie::new(movie, providers)
            })
            .collect()
    }

    async fn movie_providers(&self, movie_id: u64) -> std::result::Result<Vec<Provider>, UpstreamError> {
        let body: MovieWatchProviders = self
            .fetch_as(&UpstreamRequest::movie_providers(movie_id))
            .await?;
        Ok(region_providers(body, &self.config.locale.region))
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // HELPERS
    // ═══════════════════════════════════════════════════════════════════════════

    /// Serves `key` from the cache, or awaits `load`, stores and returns it.
    ///
    /// `load` is lazy and never polled on a hit.
    async fn cached<T, F>(&self, key: String, load: F) -> Result<Value>
    where
        T: Serialize,
        F: Future<Output = Result<T>>,
    {
        if let Some(hit) = self.cache.get(&key).await {
            debug!(key = %key, "Cache hit");
            return Ok(hit);
        }

        let value = serde_json::to_value(load.await?)?;
        self.cache.set(&key, value.clone()).await;
        Ok(value)
    }

    /// Fetches upstream pages `2p-1` and `2p` concurrently and concatenates
    /// their results in order. Returns the movies and the upstream page count.
    async fn fetch_double_page<R>(&self, page: u32, request_for: R) -> Result<(Vec<Movie>, u32)>
    where
        R: Fn(u32) -> UpstreamRequest,
    {
        let second = page
            .checked_mul(PAGES_PER_LOGICAL_PAGE)
            .ok_or_else(|| MovieError::InvalidParameter {
                name: "page",
                reason: format!("{} is out of range", page),
            })?;
        let first_request = request_for(second - 1);
        let second_request = request_for(second);

        let (first_page, second_page) = futures::try_join!(
            self.fetch_as::<MoviePage>(&first_request),
            self.fetch_as::<MoviePage>(&second_request),
        )?;

        let mut movies = first_page.results;
        movies.extend(second_page.results);
        Ok((movies, first_page.total_pages))
    }

    async fn fetch_as<T: DeserializeOwned>(
        &self,
        request: &UpstreamRequest,
    ) -> std::result::Result<T, UpstreamError> {
        let body = self.source.fetch(request).await?;
        serde_json::from_value(body).map_err(|e| UpstreamError::Decode {
            path: request.path.clone(),
            reason: e.to_string(),
        })
    }
}

/// Upstream page count expressed in double-size logical pages.
pub(crate) fn halve_pages(upstream_total_pages: u32) -> u32 {
    upstream_total_pages.div_ceil(PAGES_PER_LOGICAL_PAGE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{CountingStore, FakeSource};
    use serde_json::json;
    use std::sync::atomic::Ordering;
    use test_case::test_case;

    fn catalog_with(source: &Arc<FakeSource>, cache: &Arc<CountingStore>) -> Catalog {
        Catalog::new(source.clone(), cache.clone(), CatalogConfig::default())
    }

    fn setup() -> (Arc<FakeSource>, Arc<CountingStore>, Catalog) {
        let source = Arc::new(FakeSource::new());
        let cache = Arc::new(CountingStore::new());
        let catalog = catalog_with(&source, &cache);
        (source, cache, catalog)
    }

    fn ids(value: &Value) -> Vec<u64> {
        value["results"]
            .as_array()
            .unwrap()
            .iter()
            .map(|m| m["id"].as_u64().unwrap())
            .collect()
    }

    #[test_case(1, 1 ; "single page")]
    #[test_case(7, 4 ; "odd count rounds up")]
    #[test_case(8, 4 ; "even count halves")]
    #[test_case(0, 0 ; "empty listing")]
    fn test_halve_pages(upstream: u32, expected: u32) {
        assert_eq!(halve_pages(upstream), expected);
    }

    #[tokio::test]
    async fn test_genres_cached() {
        let (source, cache, catalog) = setup();
        source.route("/genre/movie/list", json!({ "genres": [{ "id": 18, "name": "드라마" }] }));

        let first = catalog.genres().await.unwrap();
        let second = catalog.genres().await.unwrap();

        assert_eq!(source.call_count(), 1);
        assert_eq!(first.to_string(), second.to_string());
        assert_eq!(first["genres"][0]["name"], json!("드라마"));
        assert_eq!(cache.sets.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_providers_truncated_to_ten() {
        let (source, _cache, catalog) = setup();
        let list: Vec<Value> = (1..=15)
            .map(|id| json!({ "provider_id": id, "provider_name": format!("P{}", id) }))
            .collect();
        source.route("/watch/providers/movie", json!({ "results": list }));

        let providers = catalog.providers().await.unwrap();
        let providers = providers.as_array().unwrap();
        assert_eq!(providers.len(), 10);
        assert_eq!(providers[0]["provider_id"], json!(1));
        assert_eq!(providers[9]["provider_id"], json!(10));
    }

    #[tokio::test]
    async fn test_genre_page_two_fetches_upstream_three_and_four() {
        let (source, _cache, catalog) = setup();
        source.listing("/discover/movie?page=3", &[31, 32, 33], 9);
        source.listing("/discover/movie?page=4", &[41, 42], 9);

        let page = catalog.by_genre(&GenreQuery::new("18").page(2)).await.unwrap();

        let pages: Vec<String> = source
            .calls_to("/discover/movie")
            .iter()
            .map(|r| r.get_param("page").unwrap().to_string())
            .collect();
        assert_eq!(pages.len(), 2);
        assert!(pages.contains(&"3".to_string()));
        assert!(pages.contains(&"4".to_string()));

        assert_eq!(ids(&page), vec![31, 32, 33, 41, 42]);
        assert_eq!(page["page"], json!(2));
        assert_eq!(page["total_pages"], json!(5));
    }

    #[test_case(19, 10, 10 ; "capped at default")]
    #[test_case(19, 5, 5 ; "capped at five")]
    #[test_case(3, 10, 2 ; "below cap")]
    #[tokio::test]
    async fn test_genre_total_pages_cap(upstream_total: u32, cap: u32, expected: u32) {
        let source = Arc::new(FakeSource::new());
        source.listing("/discover/movie?page=1", &[1], upstream_total);
        source.listing("/discover/movie?page=2", &[2], upstream_total);
        let catalog = Catalog::new(
            source.clone(),
            Arc::new(CountingStore::new()),
            CatalogConfig::default().with_genre_page_cap(cap),
        );

        let page = catalog.by_genre(&GenreQuery::new("all")).await.unwrap();
        assert_eq!(page["total_pages"], json!(expected));
    }

    #[tokio::test]
    async fn test_genre_filters_reach_upstream() {
        let (source, cache, catalog) = setup();
        source.listing("/discover/movie", &[], 1);

        catalog.by_genre(&GenreQuery::new("all")).await.unwrap();
        let unfiltered = &source.calls_to("/discover/movie")[0];
        assert_eq!(unfiltered.get_param("with_genres"), None);
        assert_eq!(unfiltered.get_param("with_watch_providers"), None);

        catalog
            .by_genre(&GenreQuery::new("28").provider("8"))
            .await
            .unwrap();
        let filtered = source.calls_to("/discover/movie").pop().unwrap();
        assert_eq!(filtered.get_param("with_genres"), Some("28"));
        assert_eq!(filtered.get_param("with_watch_providers"), Some("8"));

        assert!(cache.contains("genre-all-ott-none-page-1"));
        assert!(cache.contains("genre-28-ott-8-page-1"));
    }

    #[tokio::test]
    async fn test_genre_listing_enriches_and_dedupes() {
        let (source, _cache, catalog) = setup();
        source.listing("/discover/movie?page=1", &[1], 1);
        source.listing("/discover/movie?page=2", &[], 1);
        source.providers_for(1, &[(8, "A"), (97, "B")], &[(97, "B"), (3, "C")]);

        let page = catalog.by_genre(&GenreQuery::new("18")).await.unwrap();
        let names: Vec<&str> = page["results"][0]["ottProviders"]
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["provider_name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[tokio::test]
    async fn test_single_enrichment_failure_degrades_one_item() {
        let (source, _cache, catalog) = setup();
        source.listing("/discover/movie?page=1", &[1, 2, 3], 1);
        source.listing("/discover/movie?page=2", &[4], 1);
        for id in [1, 3, 4] {
            source.providers_for(id, &[(8, "Netflix")], &[]);
        }
        source.fail("/movie/2/watch/providers");

        let page = catalog.by_genre(&GenreQuery::new("18")).await.unwrap();
        let results = page["results"].as_array().unwrap();

        assert_eq!(results.len(), 4);
        assert_eq!(results[1]["id"], json!(2));
        assert_eq!(results[1]["ottProviders"], json!([]));
        for i in [0, 2, 3] {
            assert_eq!(results[i]["ottProviders"][0]["provider_name"], json!("Netflix"));
        }
    }

    #[tokio::test]
    async fn test_primary_failure_is_fatal_and_not_cached() {
        let (source, cache, catalog) = setup();
        source.listing("/discover/movie?page=1", &[1], 1);
        source.fail("/discover/movie?page=2");

        let err = catalog.by_genre(&GenreQuery::new("18")).await.unwrap_err();
        assert!(err.is_upstream_error());
        assert_eq!(cache.sets.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_page_zero_rejected() {
        let (source, cache, catalog) = setup();
        let err = catalog.popular(Some(0)).await.unwrap_err();
        assert!(err.is_client_error());
        assert_eq!(source.call_count(), 0);
        assert_eq!(cache.interactions(), 0);
    }

    #[test_case(GenreQuery::new("18-ott-8") ; "composite genre id")]
    #[test_case(GenreQuery::new("18").provider("8-ott-none") ; "composite provider id")]
    #[test_case(GenreQuery::new("drama") ; "named genre")]
    #[tokio::test]
    async fn test_genre_ids_must_be_numeric(query: GenreQuery) {
        let (source, cache, catalog) = setup();
        let err = catalog.by_genre(&query).await.unwrap_err();
        assert!(err.is_client_error());
        assert_eq!(source.call_count(), 0);
        assert_eq!(cache.interactions(), 0);
    }

    #[tokio::test]
    async fn test_now_playing_bare_list_cached() {
        let (source, _cache, catalog) = setup();
        source.listing("/movie/now_playing", &[10, 11], 3);

        let first = catalog.now_playing().await.unwrap();
        let second = catalog.now_playing().await.unwrap();

        assert!(first.is_array());
        assert_eq!(first.as_array().unwrap().len(), 2);
        assert!(first[0].get("ottProviders").is_none());
        assert_eq!(first, second);
        assert_eq!(source.call_count(), 1);
    }

    #[tokio::test]
    async fn test_upcoming_is_separate_entry() {
        let (source, _cache, catalog) = setup();
        source.listing("/movie/now_playing", &[10], 1);
        source.listing("/movie/upcoming", &[20], 1);

        let now = catalog.now_playing().await.unwrap();
        let upcoming = catalog.upcoming().await.unwrap();
        assert_eq!(now[0]["id"], json!(10));
        assert_eq!(upcoming[0]["id"], json!(20));
    }

    #[tokio::test]
    async fn test_popular_has_no_cap() {
        let (source, _cache, catalog) = setup();
        source.listing("/movie/top_rated?page=1", &[1, 2], 499);
        source.listing("/movie/top_rated?page=2", &[3], 499);

        let page = catalog.popular(None).await.unwrap();
        assert_eq!(page["total_pages"], json!(250));
        assert_eq!(ids(&page), vec![1, 2, 3]);

        let again = catalog.popular(Some(1)).await.unwrap();
        assert_eq!(page.to_string(), again.to_string());
        assert_eq!(source.calls_to("/movie/top_rated").len(), 2);
    }

    #[tokio::test]
    async fn test_popular_page_two_fetches_upstream_three_and_four() {
        let (source, cache, catalog) = setup();
        source.listing("/movie/top_rated?page=3", &[5], 10);
        source.listing("/movie/top_rated?page=4", &[6, 7], 10);

        let page = catalog.popular(Some(2)).await.unwrap();
        assert_eq!(page["page"], json!(2));
        assert_eq!(ids(&page), vec![5, 6, 7]);

        let mut pages: Vec<String> = source
            .calls_to("/movie/top_rated")
            .iter()
            .filter_map(|r| r.get_param("page").map(str::to_string))
            .collect();
        pages.sort();
        assert_eq!(pages, vec!["3", "4"]);
        assert!(cache.contains("popular-page-2"));
    }

    #[tokio::test]
    async fn test_now_playing_keeps_upstream_encoding() {
        let (source, _cache, catalog) = setup();
        source.route(
            "/movie/now_playing",
            json!({ "page": 1, "total_pages": 1, "results": [
                { "id": 3, "title": "t", "poster_path": null, "vote_average": 0, "genre_ids": [18] }
            ] }),
        );

        let list = catalog.now_playing().await.unwrap();
        assert_eq!(list[0]["poster_path"], Value::Null);
        assert!(list[0].as_object().unwrap().contains_key("poster_path"));
        assert!(list[0]["vote_average"].is_u64());
        assert_eq!(list[0]["genre_ids"], json!([18]));
    }

    fn detail_routes(source: &FakeSource, videos: Value) {
        source.route(
            "/movie/550",
            json!({ "id": 550, "title": "Fight Club", "release_date": "1999-10-15", "runtime": 139 }),
        );
        source.route(
            "/movie/550/release_dates",
            json!({ "results": [
                { "iso_3166_1": "US", "release_dates": [{ "release_date": "1999-10-15T00:00:00.000Z", "type": 3 }] },
                { "iso_3166_1": "KR", "release_dates": [
                    { "release_date": "2024-04-01T00:00:00.000Z", "type": 4 },
                    { "release_date": "2024-05-01T00:00:00.000Z", "type": 3 }
                ] }
            ] }),
        );
        source.route("/movie/550/videos", json!({ "results": videos }));
    }

    #[tokio::test]
    async fn test_detail_release_date_and_trailer() {
        let (source, _cache, catalog) = setup();
        detail_routes(
            &source,
            json!([
                { "type": "Teaser", "site": "YouTube", "key": "teaser" },
                { "type": "Trailer", "site": "YouTube", "key": "trailer" }
            ]),
        );

        let detail = catalog.detail(550).await.unwrap();
        assert_eq!(detail["release_date"], json!("2024-05-01"));
        assert_eq!(detail["runtime"], json!(139));
        assert_eq!(detail["trailer"]["key"], json!("trailer"));
        assert_eq!(source.call_count(), 3);

        catalog.detail(550).await.unwrap();
        assert_eq!(source.call_count(), 3);
    }

    #[tokio::test]
    async fn test_detail_without_videos() {
        let (source, _cache, catalog) = setup();
        detail_routes(&source, json!([]));

        let detail = catalog.detail(550).await.unwrap();
        assert_eq!(detail["trailer"], Value::Null);
    }

    #[tokio::test]
    async fn test_detail_keeps_upstream_date_without_region() {
        let source = Arc::new(FakeSource::new());
        detail_routes(&source, json!([]));
        let catalog = Catalog::new(
            source.clone(),
            Arc::new(CountingStore::new()),
            CatalogConfig::default()
                .with_locale(marquee_core::types::Locale::new("ja-JP", "JP")),
        );

        let detail = catalog.detail(550).await.unwrap();
        assert_eq!(detail["release_date"], json!("1999-10-15"));
    }

    #[tokio::test]
    async fn test_search_missing_query() {
        let (source, cache, catalog) = setup();

        let err = catalog.search(&SearchQuery::default()).await.unwrap_err();
        assert!(matches!(err, MovieError::MissingParameter("query")));
        assert_eq!(source.call_count(), 0);
        assert_eq!(cache.interactions(), 0);
    }

    fn search_hits(source: &FakeSource) {
        source.route(
            "/search/movie?page=1",
            json!({ "page": 1, "total_pages": 1, "results": [
                { "id": 1, "title": "abc one", "genre_ids": [18, 35] },
                { "id": 2, "title": "abc two", "genre_ids": [28] },
                { "id": 3, "title": "abc three", "genre_ids": [18] }
            ] }),
        );
        source.providers_for(1, &[(8, "Netflix")], &[]);
        source.providers_for(2, &[(337, "Disney Plus")], &[]);
        source.providers_for(3, &[], &[(3, "Google Play Movies")]);
    }

    #[tokio::test]
    async fn test_search_unfiltered() {
        let (source, _cache, catalog) = setup();
        search_hits(&source);

        let results = catalog.search(&SearchQuery::new("abc")).await.unwrap();
        assert_eq!(ids(&results), vec![1, 2, 3]);
        assert_eq!(results["total_results"], json!(3));
        assert_eq!(
            source.calls_to("/search/movie")[0].get_param("query"),
            Some("abc")
        );
    }

    #[tokio::test]
    async fn test_search_genre_filter() {
        let (source, _cache, catalog) = setup();
        search_hits(&source);

        let results = catalog
            .search(&SearchQuery::new("abc").genre("18"))
            .await
            .unwrap();
        assert_eq!(ids(&results), vec![1, 3]);
        assert_eq!(results["total_results"], json!(2));
        assert!(source.calls_to("/movie/2/watch/providers").is_empty());
    }

    #[tokio::test]
    async fn test_search_provider_filter() {
        let (source, _cache, catalog) = setup();
        search_hits(&source);

        let results = catalog
            .search(&SearchQuery::new("abc").provider("337"))
            .await
            .unwrap();
        assert_eq!(ids(&results), vec![2]);
        assert_eq!(results["total_results"], json!(1));
    }

    #[tokio::test]
    async fn test_search_enriches_at_most_forty() {
        let (source, _cache, catalog) = setup();
        let hits: Vec<Value> = (1..=55).map(|id| json!({ "id": id, "genre_ids": [] })).collect();
        source.route("/search/movie", json!({ "results": hits }));

        let results = catalog.search(&SearchQuery::new("the")).await.unwrap();
        assert_eq!(results["total_results"], json!(40));

        let lookups = source
            .calls()
            .iter()
            .filter(|r| r.path.ends_with("/watch/providers"))
            .count();
        assert_eq!(lookups, 40);
    }

    #[tokio::test]
    async fn test_search_cached_per_filter() {
        let (source, _cache, catalog) = setup();
        search_hits(&source);

        catalog.search(&SearchQuery::new("abc")).await.unwrap();
        catalog.search(&SearchQuery::new("abc")).await.unwrap();
        assert_eq!(source.calls_to("/search/movie").len(), 1);

        catalog.search(&SearchQuery::new("abc").genre("18")).await.unwrap();
        assert_eq!(source.calls_to("/search/movie").len(), 2);
    }
}

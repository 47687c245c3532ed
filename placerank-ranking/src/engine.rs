//! `RecommendationEngine` facade over the ranking pipeline.

use placerank_core::{
    AreaLookup, CatalogError, NearbyRequest, Place, PlaceCatalog, RecommendRequest,
    RequestValidationError, SimilarityScorer, TopRatedRequest, haversine_km, parse_rating,
};
use placerank_scorer::{CompositeScorer, ScoreInputs};
use thiserror::Error;

use crate::{
    BalancedPlace, CategoryBalancer, NearbyPlace, Recommendation, ScoredCandidate, nearest, rank,
};

/// Errors returned by the engine entry points.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The catalogue snapshot could not be loaded.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    /// The request failed validation.
    #[error("invalid request: {0}")]
    InvalidRequest(#[from] RequestValidationError),
}

/// Recommendation engine generic over its collaborators: a read-only place
/// catalogue, a similarity scorer, and an area lookup.
///
/// Each entry point validates its request, loads one snapshot from the
/// catalogue and delegates to the matching `*_in` method, which callers may
/// also use directly with a snapshot they already hold.
pub struct RecommendationEngine<C, S, A>
where
    C: PlaceCatalog,
    S: SimilarityScorer,
    A: AreaLookup,
{
    catalog: C,
    scorer: S,
    areas: A,
    composite: CompositeScorer,
}

impl<C, S, A> RecommendationEngine<C, S, A>
where
    C: PlaceCatalog,
    S: SimilarityScorer,
    A: AreaLookup,
{
    /// Construct an engine from its collaborators.
    pub const fn new(catalog: C, scorer: S, areas: A) -> Self {
        Self {
            catalog,
            scorer,
            areas,
            composite: CompositeScorer,
        }
    }

    fn snapshot(&self) -> Result<Vec<Place>, EngineError> {
        self.catalog.snapshot().map_err(|err| {
            log::warn!("failed to load place catalogue: {err}");
            EngineError::from(err)
        })
    }

    fn area_name(&self, place: &Place) -> Option<String> {
        self.areas.area_of(place).map(str::to_owned)
    }

    /// Recommend places for a user.
    ///
    /// # Errors
    /// Returns [`EngineError::InvalidRequest`] for malformed requests and
    /// [`EngineError::Catalog`] when the catalogue cannot be read.
    pub fn recommend(&self, request: &RecommendRequest) -> Result<Vec<Recommendation>, EngineError> {
        request.validate()?;
        let places = self.snapshot()?;
        self.recommend_in(&places, request)
    }

    /// Recommend places from a caller-supplied snapshot.
    ///
    /// Places whose normalised rating is below `min_rating`, or that lie
    /// outside the requested area, are dropped. The score itself weighs the
    /// rating on its source scale, so a ten-point hotel is not penalised. The rest are scored by similarity, proximity, rating and
    /// popularity, then ranked. Places without coordinates score as if they
    /// were at the user's position and report no distance.
    ///
    /// # Errors
    /// Returns [`EngineError::InvalidRequest`] for malformed requests.
    pub fn recommend_in(
        &self,
        places: &[Place],
        request: &RecommendRequest,
    ) -> Result<Vec<Recommendation>, EngineError> {
        request.validate()?;
        let query = request.query();
        let area = request
            .area
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty());

        let candidates: Vec<ScoredCandidate<'_>> = places
            .iter()
            .filter(|place| place.normalized_rating() >= request.min_rating)
            .filter(|place| area.is_none_or(|name| self.areas.is_in_area(place, name)))
            .map(|place| {
                let normalized_rating = place.normalized_rating();
                let distance_km = place
                    .coordinates()
                    .map(|location| haversine_km(request.origin, location));
                let breakdown = self.composite.breakdown(&ScoreInputs {
                    similarity: self.scorer.similarity(place, &query),
                    distance_km,
                    rating: parse_rating(&place.rating_raw),
                    category: &place.category,
                    full_description: &place.full_description,
                });
                ScoredCandidate {
                    place,
                    distance_km,
                    normalized_rating,
                    breakdown,
                }
            })
            .collect();
        log::debug!(
            "scored {} of {} places for recommendation",
            candidates.len(),
            places.len()
        );

        Ok(rank(candidates, request.top_n)
            .into_iter()
            .map(|candidate| self.recommendation(&candidate))
            .collect())
    }

    fn recommendation(&self, candidate: &ScoredCandidate<'_>) -> Recommendation {
        let place = candidate.place;
        Recommendation {
            id: place.id,
            name: place.name.clone(),
            category: place.category.clone(),
            distance_km: candidate.distance_km,
            rating: candidate.normalized_rating,
            score: candidate.composite_score(),
            map_link: place.links.map.clone(),
            area: self.area_name(place),
            place_details: place.clone(),
        }
    }

    /// List the best places of every category with an equal quota each.
    ///
    /// # Errors
    /// Returns [`EngineError::Catalog`] when the catalogue cannot be read.
    pub fn top_rated(&self, request: &TopRatedRequest) -> Result<Vec<BalancedPlace>, EngineError> {
        let places = self.snapshot()?;
        Ok(self.top_rated_in(&places, request))
    }

    /// Build a balanced top-rated listing from a caller-supplied snapshot.
    #[must_use]
    pub fn top_rated_in(&self, places: &[Place], request: &TopRatedRequest) -> Vec<BalancedPlace> {
        let listing = CategoryBalancer.balance(places, request.top_n);
        log::debug!(
            "selected {} balanced places from {}",
            listing.len(),
            places.len()
        );
        listing
            .into_iter()
            .map(|entry| BalancedPlace {
                place: entry.place.clone(),
                bucket: entry.bucket,
                bucket_score: entry.bucket_score,
                rating: entry.normalized_rating,
                area: self.area_name(entry.place),
            })
            .collect()
    }

    /// Find the places closest to a position.
    ///
    /// # Errors
    /// Returns [`EngineError::InvalidRequest`] for an invalid origin and
    /// [`EngineError::Catalog`] when the catalogue cannot be read.
    pub fn nearby(&self, request: &NearbyRequest) -> Result<Vec<NearbyPlace>, EngineError> {
        request.validate()?;
        let places = self.snapshot()?;
        self.nearby_in(&places, request)
    }

    /// Find the closest places in a caller-supplied snapshot.
    ///
    /// # Errors
    /// Returns [`EngineError::InvalidRequest`] for an invalid origin.
    pub fn nearby_in(
        &self,
        places: &[Place],
        request: &NearbyRequest,
    ) -> Result<Vec<NearbyPlace>, EngineError> {
        request.validate()?;
        Ok(nearest(places, request.origin, request.top_n)
            .into_iter()
            .map(|candidate| NearbyPlace {
                place: candidate.place.clone(),
                distance_km: candidate.distance_km,
                area: self.area_name(candidate.place),
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::Coord;
    use placerank_core::{
        AddressAreaTable, MemoryCatalog, NoAreas, test_support::UnavailableCatalog,
    };
    use placerank_scorer::TextRelevanceScorer;
    use rstest::{fixture, rstest};

    const DOWNTOWN: Coord<f64> = Coord {
        x: 31.2357,
        y: 30.0444,
    };

    #[fixture]
    fn places() -> Vec<Place> {
        vec![
            Place::new(1, "Zooba", "Restaurant")
                .with_rating("4.4")
                .with_address("26th of July St, Zamalek")
                .with_location(Coord {
                    x: 31.2243,
                    y: 30.0609,
                }),
            Place::new(2, "Cairo Marriott", "Hotel")
                .with_rating("9")
                .with_address("16 Saraya El Gezira, Zamalek")
                .with_location(Coord {
                    x: 31.2247,
                    y: 30.0571,
                }),
            Place::new(3, "Cafe Riche", "Cafe")
                .with_rating("3")
                .with_address("17 Talaat Harb St, Downtown"),
        ]
    }

    fn engine(
        places: Vec<Place>,
    ) -> RecommendationEngine<MemoryCatalog, TextRelevanceScorer, AddressAreaTable> {
        RecommendationEngine::new(
            MemoryCatalog::new(places),
            TextRelevanceScorer,
            AddressAreaTable::default(),
        )
    }

    #[rstest]
    fn min_rating_filters_before_scoring(places: Vec<Place>) {
        let request = RecommendRequest::new(DOWNTOWN).with_min_rating(4.0);
        let ids: Vec<_> = engine(places)
            .recommend(&request)
            .expect("recommend")
            .iter()
            .map(|rec| rec.id)
            .collect();
        assert_eq!(ids.len(), 2);
        assert!(!ids.contains(&3));
    }

    #[rstest]
    fn area_filter_restricts_candidates(places: Vec<Place>) {
        let request = RecommendRequest::new(DOWNTOWN).with_area("downtown");
        let results = engine(places).recommend(&request).expect("recommend");
        assert_eq!(results.len(), 1);
        let first = results.first().expect("one result");
        assert_eq!(first.id, 3);
        assert_eq!(first.area.as_deref(), Some("Downtown"));
        assert!(first.distance_km.is_none());
    }

    #[rstest]
    fn blank_area_filter_is_ignored(places: Vec<Place>) {
        let request = RecommendRequest::new(DOWNTOWN).with_area("  ");
        assert_eq!(engine(places).recommend(&request).expect("recommend").len(), 3);
    }

    #[rstest]
    fn recommendations_carry_place_details(places: Vec<Place>) {
        let request = RecommendRequest::new(DOWNTOWN).with_category("Hotel");
        let results = engine(places).recommend(&request).expect("recommend");
        let hotel = results.first().expect("hotel ranked first");
        assert_eq!(hotel.id, 2);
        assert_eq!(hotel.rating, 4.5);
        assert_eq!(hotel.place_details.name, "Cairo Marriott");
        assert_eq!(hotel.area.as_deref(), Some("Zamalek"));
        assert!(hotel.distance_km.is_some_and(|d| d > 0.0));
    }

    #[rstest]
    fn perfect_hotel_ties_with_perfect_cafe() {
        let places = vec![
            Place::new(1, "Four Seasons", "Hotel")
                .with_rating("10")
                .with_location(DOWNTOWN),
            Place::new(2, "Cafe Riche", "Cafe")
                .with_rating("5")
                .with_location(DOWNTOWN),
        ];
        let results = engine(places)
            .recommend(&RecommendRequest::new(DOWNTOWN))
            .expect("recommend");
        assert_eq!(results.len(), 2);
        let hotel = results.first().expect("hotel recommended");
        let cafe = results.get(1).expect("cafe recommended");
        assert_eq!(hotel.id, 1);
        assert_eq!(hotel.rating, 5.0);
        assert_eq!(cafe.rating, 5.0);
        assert!((hotel.score - cafe.score).abs() < 1e-12);
    }

    #[rstest]
    fn invalid_requests_fail_before_loading_the_catalogue() {
        let engine = RecommendationEngine::new(
            UnavailableCatalog::new("offline"),
            TextRelevanceScorer,
            NoAreas,
        );
        let request = RecommendRequest::new(Coord { x: 0.0, y: 120.0 });
        let err = engine.recommend(&request).expect_err("invalid origin");
        assert!(matches!(err, EngineError::InvalidRequest(_)));
    }

    #[rstest]
    fn catalogue_failures_propagate() {
        let engine = RecommendationEngine::new(
            UnavailableCatalog::new("offline"),
            TextRelevanceScorer,
            NoAreas,
        );
        let err = engine
            .top_rated(&TopRatedRequest::default())
            .expect_err("catalogue offline");
        assert!(matches!(err, EngineError::Catalog(_)));
        assert!(err.to_string().contains("offline"));
        assert!(engine.nearby(&NearbyRequest::new(DOWNTOWN)).is_err());
    }

    #[rstest]
    fn nearby_reports_areas(places: Vec<Place>) {
        let results = engine(places)
            .nearby(&NearbyRequest::new(DOWNTOWN))
            .expect("nearby");
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|entry| entry.area.as_deref() == Some("Zamalek")));
    }

    #[rstest]
    fn top_rated_reports_buckets(places: Vec<Place>) {
        let results = engine(places).top_rated(&TopRatedRequest::new(4)).expect("top rated");
        let ids: Vec<_> = results.iter().map(|entry| entry.place.id).collect();
        assert_eq!(ids, vec![2, 1, 3]);
    }
}

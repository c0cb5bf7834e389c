// src/models/rating.rs
// DOCUMENTATION: Review rating aggregation
// PURPOSE: Turn the reviews of one venue into its review count and average ratings

use super::{Review, VenueRatings};

/// Rating categories a review can score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingCategory {
    Overall,
    ChangingFacilities,
    HighChairs,
    PramAccess,
    StaffFriendliness,
    NoiseLevel,
}

impl RatingCategory {
    pub const ALL: [RatingCategory; 6] = [
        RatingCategory::Overall,
        RatingCategory::ChangingFacilities,
        RatingCategory::HighChairs,
        RatingCategory::PramAccess,
        RatingCategory::StaffFriendliness,
        RatingCategory::NoiseLevel,
    ];

    fn index(self) -> usize {
        self as usize
    }
}

impl Review {
    /// Score given for one category, if any
    pub fn rating(&self, category: RatingCategory) -> Option<i32> {
        match category {
            RatingCategory::Overall => Some(self.overall_rating),
            RatingCategory::ChangingFacilities => self.changing_facilities_rating,
            RatingCategory::HighChairs => self.high_chairs_rating,
            RatingCategory::PramAccess => self.pram_access_rating,
            RatingCategory::StaffFriendliness => self.staff_friendliness_rating,
            RatingCategory::NoiseLevel => self.noise_level_rating,
        }
    }
}

impl VenueRatings {
    pub fn get(&self, category: RatingCategory) -> Option<f64> {
        match category {
            RatingCategory::Overall => self.overall_rating,
            RatingCategory::ChangingFacilities => self.changing_facilities_rating,
            RatingCategory::HighChairs => self.high_chairs_rating,
            RatingCategory::PramAccess => self.pram_access_rating,
            RatingCategory::StaffFriendliness => self.staff_friendliness_rating,
            RatingCategory::NoiseLevel => self.noise_level_rating,
        }
    }

    fn slot(&mut self, category: RatingCategory) -> &mut Option<f64> {
        match category {
            RatingCategory::Overall => &mut self.overall_rating,
            RatingCategory::ChangingFacilities => &mut self.changing_facilities_rating,
            RatingCategory::HighChairs => &mut self.high_chairs_rating,
            RatingCategory::PramAccess => &mut self.pram_access_rating,
            RatingCategory::StaffFriendliness => &mut self.staff_friendliness_rating,
            RatingCategory::NoiseLevel => &mut self.noise_level_rating,
        }
    }
}

/// Result of aggregating the reviews of a venue
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RatingSummary {
    pub review_count: i32,
    pub ratings: VenueRatings,
}

/// Running sums per category
#[derive(Debug, Default)]
pub struct RatingAccumulator {
    review_count: i32,
    sums: [i64; 6],
}

impl RatingAccumulator {
    /// A category the review did not score adds 0
    pub fn add(&mut self, review: &Review) {
        self.review_count += 1;
        for category in RatingCategory::ALL {
            self.sums[category.index()] += i64::from(review.rating(category).unwrap_or(0));
        }
    }

    /// Every category is divided by the full review count; no reviews means no averages
    pub fn build(self) -> RatingSummary {
        let mut ratings = VenueRatings::default();
        if self.review_count > 0 {
            let count = f64::from(self.review_count);
            for category in RatingCategory::ALL {
                *ratings.slot(category) = Some(self.sums[category.index()] as f64 / count);
            }
        }

        RatingSummary {
            review_count: self.review_count,
            ratings,
        }
    }
}

/// Aggregate all reviews of one venue
pub fn summarize<'a, I>(reviews: I) -> RatingSummary
where
    I: IntoIterator<Item = &'a Review>,
{
    reviews
        .into_iter()
        .fold(RatingAccumulator::default(), |mut acc, review| {
            acc.add(review);
            acc
        })
        .build()
}

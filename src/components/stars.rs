//! Star Rating Display

use leptos::prelude::*;

use crate::models::MAX_RATING;

/// Fill state of each star for `rating`
pub fn star_fill(rating: f64) -> Vec<StarFill> {
    let rating = rating.clamp(0.0, f64::from(MAX_RATING));
    let full = rating.floor() as u8;
    let half = rating - rating.floor() >= 0.5;
    (1..=MAX_RATING)
        .map(|star| {
            if star <= full {
                StarFill::Full
            } else if star == full + 1 && half {
                StarFill::Half
            } else {
                StarFill::Empty
            }
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StarFill {
    Full,
    Half,
    Empty,
}

impl StarFill {
    fn class(self) -> &'static str {
        match self {
            StarFill::Full => "text-yellow-400",
            StarFill::Half => "text-yellow-400 opacity-50",
            StarFill::Empty => "text-gray-300",
        }
    }
}

#[component]
pub fn StarRating(rating: f64, #[prop(default = "w-4 h-4")] size: &'static str) -> impl IntoView {
    view! {
        <span class="inline-flex" aria-label=format!("{:.1} / {}", rating, MAX_RATING)>
            {star_fill(rating)
                .into_iter()
                .map(|fill| view! { <span class=format!("{} {}", size, fill.class())>"★"</span> })
                .collect_view()}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_star() {
        assert_eq!(
            star_fill(3.5),
            vec![StarFill::Full, StarFill::Full, StarFill::Full, StarFill::Half, StarFill::Empty]
        );
    }

    #[test]
    fn test_out_of_range_is_clamped() {
        assert_eq!(star_fill(9.0), vec![StarFill::Full; 5]);
        assert_eq!(star_fill(-1.0), vec![StarFill::Empty; 5]);
    }
}

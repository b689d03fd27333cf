use crate::network::{Route, StationId};

/// The hand-curated subway lines, as sequences of station ids from the
/// station directory file.
pub fn subway_lines() -> Vec<Route> {
    vec![
        line(
            "red_mattapan",
            &[
                70, 28, 111, 31, 72, 27, 29, 7, 97, 49, 95, 61, 5, 24, 98, 43, 83, 32, 62, 30, 54,
                85, 41, 3,
            ],
        ),
        line(
            "red_braintree",
            &[
                21, 87, 88, 117, 77, 61, 5, 24, 98, 43, 83, 32, 62, 30, 54, 85, 41, 3,
            ],
        ),
        line(
            "orange",
            &[
                80, 68, 116, 8, 105, 38, 78, 57, 102, 43, 35, 110, 10, 69, 94, 93, 60, 103, 52, 50,
            ],
        ),
        line("blue", &[118, 90, 12, 104, 81, 119, 2, 71, 1, 102, 51, 19]),
        line(
            "green_bc",
            &[
                83, 20, 6, 40, 59, 63, 14, 17, 16, 18, 101, 84, 9, 82, 55, 53, 4, 113, 115, 107,
                36, 34, 99, 15,
            ],
        ),
        line(
            "green_cc",
            &[
                78, 57, 51, 83, 20, 6, 40, 59, 63, 100, 56, 64, 101, 39, 106, 22, 46, 114, 109, 42,
                45, 37,
            ],
        ),
        line(
            "green_heath",
            &[
                65, 96, 78, 57, 51, 83, 20, 6, 40, 86, 108, 79, 74, 67, 23, 48, 73, 92, 11, 58,
            ],
        ),
        line(
            "green_riverside",
            &[
                83, 20, 6, 40, 59, 63, 47, 66, 26, 25, 13, 89, 33, 75, 76, 44, 112, 120, 91,
            ],
        ),
    ]
}

fn line(name: &str, stops: &[StationId]) -> Route {
    Route::new(name, stops.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::Network;

    #[test]
    fn every_line_builds_into_one_network() {
        let network = Network::build(&subway_lines()).unwrap();

        assert!((1..=120).all(|station| network.contains(station)));
        assert!(!network.contains(121));
    }

    #[test]
    fn every_line_has_at_least_two_stops() {
        for route in subway_lines() {
            assert!(route.stops.len() >= 2, "{} is too short", route.name);
        }
    }
}

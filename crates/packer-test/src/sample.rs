//! The reference sample: four tasks covering a single best item, an empty
//! package, a two-item optimum and a cost tie broken by weight.
//!
//! # Example
//!
//! ```
//! use packer_test::sample::{sample_tasks, SAMPLE_OUTPUT};
//!
//! let tasks = sample_tasks();
//! assert_eq!(tasks.len(), 4);
//! assert_eq!(SAMPLE_OUTPUT.lines().count(), 4);
//! ```

use packer_core::{Item, Task};

/// Input text in the line format read by `packer-io`.
pub const SAMPLE_INPUT: &str = "\
81 : (1,53.38,€45) (2,88.62,€98) (3,78.48,€3) (4,72.30,€76) (5,30.18,€9) (6,46.34,€48)
8 : (1,15.3,€34)
75 : (1,85.31,€29) (2,14.55,€74) (3,3.98,€16) (4,26.24,€55) (5,63.69,€52) (6,76.25,€75) (7,60.02,€74) (8,93.18,€35) (9,89.95,€78)
56 : (1,90.72,€13) (2,33.80,€40) (3,43.15,€10) (4,37.97,€16) (5,46.81,€36) (6,48.77,€79) (7,81.80,€45) (8,19.36,€79) (9,6.76,€64)
";

/// Rendered packages for [`SAMPLE_INPUT`].
pub const SAMPLE_OUTPUT: &str = "4\n-\n2,7\n8,9\n";

/// Shorthand for [`Item::new`].
pub fn item(index: u32, weight: f64, cost: f64) -> Item {
    Item::new(index, weight, cost)
}

/// The tasks of [`SAMPLE_INPUT`], built directly.
pub fn sample_tasks() -> Vec<Task> {
    vec![
        Task::new(
            81.0,
            vec![
                item(1, 53.38, 45.0),
                item(2, 88.62, 98.0),
                item(3, 78.48, 3.0),
                item(4, 72.30, 76.0),
                item(5, 30.18, 9.0),
                item(6, 46.34, 48.0),
            ],
        ),
        Task::new(8.0, vec![item(1, 15.3, 34.0)]),
        Task::new(
            75.0,
            vec![
                item(1, 85.31, 29.0),
                item(2, 14.55, 74.0),
                item(3, 3.98, 16.0),
                item(4, 26.24, 55.0),
                item(5, 63.69, 52.0),
                item(6, 76.25, 75.0),
                item(7, 60.02, 74.0),
                item(8, 93.18, 35.0),
                item(9, 89.95, 78.0),
            ],
        ),
        Task::new(
            56.0,
            vec![
                item(1, 90.72, 13.0),
                item(2, 33.80, 40.0),
                item(3, 43.15, 10.0),
                item(4, 37.97, 16.0),
                item(5, 46.81, 36.0),
                item(6, 48.77, 79.0),
                item(7, 81.80, 45.0),
                item(8, 19.36, 79.0),
                item(9, 6.76, 64.0),
            ],
        ),
    ]
}

// Descriptive metadata shown next to each algorithm

use crate::algorithms::AlgorithmKind;
use serde::Serialize;

/// Complexity summary and typical uses of one algorithm
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlgorithmInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub best: &'static str,
    pub average: &'static str,
    pub worst: &'static str,
    pub space: &'static str,
    pub requires_sorted: bool,
    pub use_cases: &'static [&'static str],
}

impl AlgorithmKind {
    pub fn info(self) -> AlgorithmInfo {
        let requires_sorted = self.requires_sorted();

        match self {
            AlgorithmKind::Linear => AlgorithmInfo {
                name: "Linear Search",
                description: "Sequentially checks each element until the target is found or every element has been checked.",
                best: "O(1) - target is the first element",
                average: "O(n)",
                worst: "O(n) - target is last or not present",
                space: "O(1)",
                requires_sorted,
                use_cases: &[
                    "Small datasets",
                    "Unsorted data",
                    "When simplicity matters more than speed",
                ],
            },
            AlgorithmKind::Binary => AlgorithmInfo {
                name: "Binary Search",
                description: "Repeatedly halves a sorted search space by comparing the target with the middle element.",
                best: "O(1) - target is the middle element",
                average: "O(log n)",
                worst: "O(log n)",
                space: "O(1)",
                requires_sorted,
                use_cases: &[
                    "Large sorted datasets",
                    "Databases and search systems",
                    "Dictionary lookups",
                ],
            },
            AlgorithmKind::Jump => AlgorithmInfo {
                name: "Jump Search",
                description: "Jumps ahead by sqrt(n) elements, then scans linearly inside the block that must hold the target.",
                best: "O(1) - target is at the first jump",
                average: "O(sqrt n)",
                worst: "O(sqrt n)",
                space: "O(1)",
                requires_sorted,
                use_cases: &[
                    "Systems where jumping backwards is costly",
                    "Large uniformly distributed sorted data",
                ],
            },
            AlgorithmKind::Exponential => AlgorithmInfo {
                name: "Exponential Search",
                description: "Doubles a bound until it passes the target, then binary searches the last interval.",
                best: "O(1) - target is the first element",
                average: "O(log n)",
                worst: "O(log n)",
                space: "O(1)",
                requires_sorted,
                use_cases: &[
                    "Unbounded or very long lists",
                    "Targets likely near the beginning",
                ],
            },
            AlgorithmKind::Naive => AlgorithmInfo {
                name: "Naive String Search",
                description: "Tries the pattern at every text position, comparing characters left to right.",
                best: "O(n) - pattern found at the beginning",
                average: "O(n * m)",
                worst: "O(n * m)",
                space: "O(1)",
                requires_sorted,
                use_cases: &["Short texts or patterns", "One-off searches", "Teaching"],
            },
            AlgorithmKind::Kmp => AlgorithmInfo {
                name: "KMP String Search",
                description: "Precomputes a failure function so a mismatch never moves backwards in the text.",
                best: "O(n + m)",
                average: "O(n + m)",
                worst: "O(n + m)",
                space: "O(m) for the failure function",
                requires_sorted,
                use_cases: &["Text editors", "DNA sequence analysis", "Lexical analysis"],
            },
            AlgorithmKind::BoyerMoore => AlgorithmInfo {
                name: "Boyer-Moore String Search",
                description: "Compares right to left and uses a bad-character table to skip alignments after a mismatch.",
                best: "O(n / m) - sublinear when the pattern is absent",
                average: "O(n)",
                worst: "O(n * m)",
                space: "O(k) for an alphabet of k characters",
                requires_sorted,
                use_cases: &[
                    "Find and replace",
                    "Large document search",
                    "Packet inspection",
                ],
            },
        }
    }
}

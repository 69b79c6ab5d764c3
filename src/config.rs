use crate::models::{PackType, TokenSeed};

/// Rejection-sampling retry budget for a single pack generation.
///
/// Raising it improves fairness of the weighted draw when rarity ratios
/// skew near the end of a run; lowering it bounds latency. 20 is the
/// value the allocation has always shipped with.
pub const DEFAULT_MAX_ATTEMPTS: usize = 20;

/// Default pack-type sampling weights: 40% standard, 30% elite, 30% full fun.
pub const DEFAULT_TYPE_WEIGHTS: [(PackType, u32); 3] = [
    (PackType::Standard, 4),
    (PackType::Elite, 3),
    (PackType::FullFun, 3),
];

/// The built-in token roster: `(token id, initial stock, rarity label)`.
///
/// Labels use the exact casing of the upstream data feed
/// (`Bronce` / `Plata` / `Gold` / `Premium`).
const SEED_ROSTER: &[(u32, i64, &str)] = &[
    (2, 1000, "Bronce"),
    (3, 1000, "Bronce"),
    (6, 1000, "Bronce"),
    (8, 1000, "Bronce"),
    (10, 1000, "Bronce"),
    (11, 1000, "Bronce"),
    (12, 1000, "Plata"),
    (13, 1000, "Bronce"),
    (14, 1000, "Bronce"),
    (15, 1000, "Bronce"),
    (17, 1000, "Plata"),
    (18, 1000, "Plata"),
    (21, 50, "Premium"),
    (22, 1000, "Bronce"),
    (25, 1000, "Bronce"),
    (26, 1000, "Bronce"),
    (27, 1000, "Gold"),
    (30, 1000, "Plata"),
    (31, 1000, "Bronce"),
    (32, 1000, "Plata"),
    (33, 1000, "Bronce"),
    (34, 1000, "Bronce"),
    (35, 1000, "Bronce"),
    (38, 1000, "Bronce"),
    (40, 1000, "Bronce"),
    (41, 1000, "Plata"),
    (44, 1000, "Bronce"),
    (47, 1000, "Bronce"),
    (48, 1000, "Bronce"),
    (49, 1000, "Bronce"),
    (50, 1000, "Plata"),
    (51, 1000, "Bronce"),
    (53, 1000, "Plata"),
    (54, 1000, "Plata"),
    (55, 1000, "Bronce"),
    (56, 1000, "Bronce"),
    (57, 1000, "Bronce"),
    (59, 200, "Plata"),
    (61, 1000, "Bronce"),
    (62, 1000, "Bronce"),
    (64, 1000, "Premium"),
    (65, 1000, "Bronce"),
    (66, 1000, "Bronce"),
    (67, 100, "Gold"),
    (68, 1000, "Bronce"),
    (69, 1000, "Bronce"),
    (70, 1000, "Bronce"),
    (71, 1000, "Plata"),
    (74, 1000, "Bronce"),
    (75, 1000, "Plata"),
    (76, 1000, "Bronce"),
    (77, 1000, "Bronce"),
    (78, 1000, "Bronce"),
    (79, 1000, "Gold"),
    (80, 1000, "Bronce"),
    (81, 1000, "Plata"),
    (82, 1000, "Bronce"),
    (83, 1000, "Bronce"),
    (84, 1000, "Bronce"),
    (85, 1000, "Bronce"),
    (86, 1000, "Bronce"),
    (87, 1000, "Bronce"),
    (88, 1000, "Bronce"),
    (89, 1000, "Bronce"),
    (90, 1000, "Bronce"),
    (91, 1000, "Bronce"),
    (92, 1000, "Bronce"),
    (93, 1000, "Plata"),
    (94, 1000, "Plata"),
    (95, 1000, "Bronce"),
    (96, 1000, "Bronce"),
    (97, 1000, "Bronce"),
    (98, 1000, "Bronce"),
    (99, 1000, "Plata"),
    (100, 1000, "Bronce"),
    (101, 1000, "Bronce"),
    (102, 1000, "Bronce"),
    (103, 1000, "Bronce"),
    (104, 1000, "Bronce"),
    (105, 1000, "Bronce"),
    (106, 1000, "Bronce"),
    (107, 1000, "Plata"),
];

/// The built-in roster as owned seed tuples, ready for
/// [`StockRegistry::from_seeds`](crate::registry::StockRegistry::from_seeds).
pub fn default_seed_data() -> Vec<TokenSeed> {
    SEED_ROSTER
        .iter()
        .map(|&(id, stock, rarity)| TokenSeed {
            id,
            stock,
            rarity: rarity.to_string(),
        })
        .collect()
}

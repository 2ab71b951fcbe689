use uniway_routing::category::Category;

/// Multiplier for the destination's surroundings. Hostels sit on slightly
/// hilly ground and sports areas have more obstacles.
pub fn terrain_factor(category: Option<Category>) -> f64 {
    match category {
        Some(Category::Hostels) => 1.1,
        Some(Category::Recreation) => 1.2,
        Some(_) | None => 1.0,
    }
}

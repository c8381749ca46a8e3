use crate::models::garden::Garden;

/// Sample beds shown on first launch.
pub fn seed_gardens() -> Vec<Garden> {
    let mut horizontal = Garden::new("garden-1", "Horizontal Bed", 3, 24);
    horizontal.add_plant("garlic", None, 2, 0);
    horizontal.add_plant("leeks", None, 5, 1);
    horizontal.add_plant("onions", None, 8, 1);

    let square = Garden::new("garden-2", "Square Bed", 12, 3);

    vec![horizontal, square]
}

use super::*;

#[test]
fn badge_class_follows_polarity() {
    assert_eq!(badge_class(Badge::confirmation(true)), "badge badge--positive");
    assert_eq!(badge_class(Badge::confirmation(false)), "badge badge--negative");
    assert_eq!(badge_class(Badge::account(false)), "badge badge--positive");
    assert_eq!(badge_class(Badge::account(true)), "badge badge--negative");
}

#[test]
fn greeting_names_the_user() {
    assert_eq!(greeting("alice"), "Welcome back, alice!");
}

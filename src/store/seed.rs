use crate::models::Category;
use crate::store::Store;

/// Account the service ships with so the ledger endpoints work out of the
/// box.
pub const DEMO_USERNAME: &str = "demo";

/// The fixed fortune catalog loaded at startup.
pub const SEED_FORTUNES: &[(&str, Category)] = &[
    (
        "Love is patient, love is kind, and what's yours will come to you at the perfect time.",
        Category::Love,
    ),
    (
        "Your heart will skip a beat when someone special crosses your path this month.",
        Category::Love,
    ),
    (
        "A connection from your past will resurface with surprising results.",
        Category::Love,
    ),
    ("The love you give is the love you get returned.", Category::Love),
    (
        "A strong romance is in your future - be open to unexpected connections.",
        Category::Love,
    ),
    (
        "Your hard work is about to pay off. Stay focused on your goals.",
        Category::Career,
    ),
    (
        "A new career opportunity will present itself. Trust your instincts.",
        Category::Career,
    ),
    (
        "Your leadership skills will be recognized and rewarded soon.",
        Category::Career,
    ),
    (
        "Collaboration will lead to your next big breakthrough at work.",
        Category::Career,
    ),
    (
        "The project you've been doubting will exceed all expectations.",
        Category::Career,
    ),
    (
        "Financial abundance flows to you effortlessly when you follow your true calling.",
        Category::Wealth,
    ),
    (
        "A small investment now will yield significant returns in the future.",
        Category::Wealth,
    ),
    (
        "The key to wealth is not finding money, but discovering your unique value.",
        Category::Wealth,
    ),
    (
        "An unexpected financial opportunity awaits you this month.",
        Category::Wealth,
    ),
    (
        "Prosperity comes when you least expect it, but most deserve it.",
        Category::Wealth,
    ),
    (
        "Good things come to those who wait, but better things come to those who take action.",
        Category::General,
    ),
    (
        "The path to success is often through unexpected detours.",
        Category::General,
    ),
    (
        "A smile is your personal welcome mat to new friendships.",
        Category::General,
    ),
    (
        "Your greatest strength is your adaptability. Use it wisely.",
        Category::General,
    ),
    ("Today's obstacles are tomorrow's stepping stones.", Category::General),
    (
        "The journey of a thousand miles begins with a single step.",
        Category::General,
    ),
    ("Your creativity will solve a long-standing problem.", Category::General),
];

/// Populates an empty store with the fixed catalog and the demo user.
pub async fn apply(store: &Store) {
    store.users.create(DEMO_USERNAME, "demo").await;

    for (message, category) in SEED_FORTUNES {
        store.catalog.create(*message, *category).await;
    }
}

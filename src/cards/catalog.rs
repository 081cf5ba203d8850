//! Edition catalog.
//!
//! The `EditionCatalog` holds every edition the app ships with and names the
//! default one. It is read-only once built; unknown ids resolve to the default.

use rustc_hash::FxHashMap;

use super::edition::{Edition, TemplateCard};

/// Registry of editions.
///
/// ## Example
///
/// ```
/// use walwal_cards::cards::{Edition, EditionCatalog};
///
/// let catalog = EditionCatalog::new(vec![Edition::new("classic", "Classic")], "classic");
///
/// assert!(catalog.get("classic").is_some());
/// assert_eq!(catalog.resolve("gone").id, "classic");
/// ```
#[derive(Clone, Debug)]
pub struct EditionCatalog {
    // Display order.
    editions: Vec<Edition>,
    by_id: FxHashMap<String, usize>,
    default_index: usize,
}

impl EditionCatalog {
    pub const CLASSIC: &'static str = "classic";

    /// Build a catalog.
    ///
    /// Panics on duplicate edition ids or if `default_id` is not among them.
    #[must_use]
    pub fn new(editions: Vec<Edition>, default_id: &str) -> Self {
        let mut by_id = FxHashMap::default();
        for (index, edition) in editions.iter().enumerate() {
            if by_id.insert(edition.id.clone(), index).is_some() {
                panic!("Edition with ID {:?} already registered", edition.id);
            }
        }

        let default_index = match by_id.get(default_id) {
            Some(&index) => index,
            None => panic!("Default edition {default_id:?} not in catalog"),
        };

        Self {
            editions,
            by_id,
            default_index,
        }
    }

    /// The editions shipped with the app, defaulting to `classic`.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(
            vec![classic(), spicy(), chill(), couples()],
            Self::CLASSIC,
        )
    }

    /// Get an edition by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Edition> {
        self.by_id.get(id).map(|&index| &self.editions[index])
    }

    /// Get an edition by id, falling back to the default edition.
    #[must_use]
    pub fn resolve(&self, id: &str) -> &Edition {
        self.get(id).unwrap_or_else(|| self.default_edition())
    }

    #[must_use]
    pub fn default_edition(&self) -> &Edition {
        &self.editions[self.default_index]
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.editions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.editions.is_empty()
    }

    /// Iterate over editions in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Edition> {
        self.editions.iter()
    }
}

impl Default for EditionCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn classic() -> Edition {
    Edition::new(EditionCatalog::CLASSIC, "Classic")
        .with_description("The original mix of dares, truths and shots")
        .with_emoji("🍻")
        .with_color("#F97316")
        .with_cards([
            TemplateCard::new("Dare", "Sing the chorus of the last song you listened to", "🎤"),
            TemplateCard::new("Shot", "Everyone wearing black takes a sip", "🥃"),
            TemplateCard::new("Truth", "What is the worst gift you ever received?", "🎁"),
            TemplateCard::new("Rule", "Nobody may say 'drink' until your next turn", "📜"),
            TemplateCard::new("Dare", "Talk in an accent until your next turn", "🗣️"),
            TemplateCard::new("Vote", "Point at who is most likely to miss their flight", "✈️"),
            TemplateCard::new("Shot", "The youngest player takes two sips", "🍼"),
            TemplateCard::new("Truth", "Show the last photo in your camera roll", "📸"),
            TemplateCard::new("Challenge", "Staring contest with the player to your left", "👀"),
            TemplateCard::new("Waterfall", "Everyone drinks, nobody stops before you do", "🌊"),
            TemplateCard::new("Dare", "Let the group write your next text message", "📱"),
            TemplateCard::new("Vote", "Who would survive longest on a desert island?", "🏝️"),
        ])
}

fn spicy() -> Edition {
    Edition::new("spicy", "Spicy")
        .with_description("Bolder dares for braver groups")
        .with_emoji("🌶️")
        .with_color("#EF4444")
        .with_cards([
            TemplateCard::new("Truth", "Who here would you call at 3am?", "📞"),
            TemplateCard::new("Dare", "Swap a piece of clothing with the player on your right", "👕"),
            TemplateCard::new("Shot", "Take a sip for every ex you still follow", "💔"),
            TemplateCard::new("Truth", "What is your most embarrassing nickname?", "🙈"),
            TemplateCard::new("Dare", "Read your last search history entry out loud", "🔍"),
            TemplateCard::new("Vote", "Who has the most questionable taste in music?", "🎧"),
            TemplateCard::new("Challenge", "Do ten push-ups or finish your drink", "💪"),
            TemplateCard::new("Rule", "Compliment someone before every sip", "💬"),
        ])
}

fn chill() -> Edition {
    Edition::new("chill", "Chill")
        .with_description("Easy questions, no drinks required")
        .with_emoji("🧊")
        .with_color("#38BDF8")
        .with_cards([
            TemplateCard::new("Question", "What is a small thing that made you happy this week?", "☀️"),
            TemplateCard::new("Question", "Which fictional world would you live in?", "🪄"),
            TemplateCard::new("Story", "Tell the group about your first concert", "🎸"),
            TemplateCard::new("Vote", "Who would make the best travel buddy?", "🧳"),
            TemplateCard::new("Question", "What skill would you learn overnight?", "🧠"),
            TemplateCard::new("Game", "Name five animals in five seconds", "🐾"),
            TemplateCard::new("Story", "Describe your perfect Sunday", "🛋️"),
            TemplateCard::new("Question", "What is your go-to karaoke song?", "🎶"),
        ])
}

fn couples() -> Edition {
    Edition::new("couples", "Couples")
        .with_description("How well do you really know each other?")
        .with_emoji("💞")
        .with_color("#EC4899")
        .with_cards([
            TemplateCard::new("Question", "Where was your first date?", "📍"),
            TemplateCard::new("Guess", "Guess your partner's favourite snack", "🍿"),
            TemplateCard::new("Dare", "Recreate your first photo together", "📷"),
            TemplateCard::new("Question", "Who said 'I love you' first?", "💌"),
            TemplateCard::new("Guess", "Guess your partner's dream holiday", "🗺️"),
            TemplateCard::new("Dare", "Slow dance for thirty seconds", "💃"),
        ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog() {
        let catalog = EditionCatalog::builtin();

        assert_eq!(catalog.default_edition().id, "classic");
        assert_eq!(catalog.len(), 4);
        for edition in catalog.iter() {
            assert!(!edition.cards.is_empty(), "{} has no cards", edition.id);
            assert!(edition.color.starts_with('#'));
        }
    }

    #[test]
    fn test_get_and_resolve() {
        let catalog = EditionCatalog::builtin();

        assert_eq!(catalog.get("spicy").map(|e| e.name.as_str()), Some("Spicy"));
        assert!(catalog.get("nope").is_none());
        assert_eq!(catalog.resolve("nope").id, "classic");
        assert_eq!(catalog.resolve("chill").id, "chill");
    }

    #[test]
    fn test_display_order_is_preserved() {
        let catalog = EditionCatalog::new(
            vec![Edition::new("b", "B"), Edition::new("a", "A")],
            "a",
        );

        let ids: Vec<_> = catalog.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
        assert_eq!(catalog.default_edition().id, "a");
    }

    #[test]
    #[should_panic(expected = "already registered")]
    fn test_duplicate_id_panics() {
        let _ = EditionCatalog::new(
            vec![Edition::new("classic", "A"), Edition::new("classic", "B")],
            "classic",
        );
    }

    #[test]
    #[should_panic(expected = "not in catalog")]
    fn test_missing_default_panics() {
        let _ = EditionCatalog::new(vec![Edition::new("a", "A")], "classic");
    }
}

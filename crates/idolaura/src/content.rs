//! Built-in display content
//!
//! The about page ships with default milestones, fun facts, hashtags and
//! stage units so a fresh deployment isn't empty. Store rows replace the
//! defaults wholesale — except hashtags, which are overlaid onto the
//! defaults by tag text so edits can override individual entries.

use crate::data::types::{FunFact, Hashtag, Milestone, StageUnit};

/// Default timeline milestones
pub fn default_milestones() -> Vec<Milestone> {
    let entries: [(&str, &str, &str); 7] = [
        ("2024", "Joined JKT48", "Became part of 13th Generation at 31.10.2024"),
        ("2025", "Shonichi Show (Ingin Bertemu)", "Debut on theater stage at 26.01.2025"),
        ("2025", "Shonichi Video Call", "Her Shonichi video call was on 23.03.2025."),
        ("2025", "Shonichi Pajama Drive", "Shonichi Pajama Drive was on 03.05.2025."),
        ("2025", "Shonichi Off Air Concert", "Shonichi Off Air Concert was on 29.06.2025."),
        ("2025", "Shonichi Kira-kira Girls", "Shonichi Kira-kira Girls was on 21.11.2025."),
        (
            "2025",
            "Shonichi Backdancer Appearance",
            "Her Shonichi backdancer appearance in JKT48 5th Stage for the Glory days song was on October 19, 2025.",
        ),
    ];
    entries
        .into_iter()
        .enumerate()
        .map(|(i, (year, title, description))| Milestone {
            id: (i + 1).to_string(),
            year: year.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            order_index: i as i32,
        })
        .collect()
}

/// Default fun fact cards
pub fn default_fun_facts() -> Vec<FunFact> {
    let entries: [(&str, &str); 10] = [
        ("Oldest Gen 13", "The oldest member of JKT48's 13th Generation"),
        ("Original Ace", "Original ace of JKT48's 13th Generation"),
        ("Multi-Talented", "Before joining JKT48, she was a pencak silat athlete and dancer"),
        (
            "Silat Champion",
            "Representing Sabda Sunda Silat School, won 1st place in Pusaka Sunda Cup Jabodetabek (July 10, 2022)",
        ),
        (
            "Dance Competitor",
            "Participated in DBL Dance Competition 2023 - West Java Series representing SMAN 3 Bogor",
        ),
        (
            "Cover Dancer",
            "Before joining JKT48, she often did JKT48 dance covers with friends on campus",
        ),
        (
            "UI Student",
            "Currently studying Creative Advertising at Universitas Indonesia, class of 2024",
        ),
        (
            "Childhood Star",
            "Appeared in JKT48's YouTube video 'Dance Class for Kids' (Feb 2016) when she was 9 years old",
        ),
        (
            "Persistent Dreamer",
            "After multiple audition attempts (Gen 10, 11, 12, KLP48), she finally passed JKT48's 13th Generation audition in 2024",
        ),
        ("Ukulele Player", "Intan is skilled at playing the ukulele, so she often covers songs."),
    ];
    entries
        .into_iter()
        .enumerate()
        .map(|(i, (title, description))| FunFact {
            id: (i + 1).to_string(),
            title: title.to_string(),
            description: description.to_string(),
            order_index: i as i32,
        })
        .collect()
}

/// Default fan hashtags
pub fn default_hashtags() -> Vec<Hashtag> {
    let entries: [(&str, &str, &str, bool); 8] = [
        ("#SenINTAN", "Every Monday", "🌅", false),
        ("#JumaTAN", "Every Friday", "✨", false),
        ("#NighTAN", "Before Bed", "🌙", false),
        ("#kataINTAN", "Quotes", "💭", false),
        ("#dancINTAN", "Dance Cover", "💃", false),
        ("#intanraksi", "Video Call", "📱", false),
        ("#sanTAN", "Every Sahur", "🍽️", true),
        ("#bukberIN", "Every Iftar", "🌅", true),
    ];
    entries
        .into_iter()
        .enumerate()
        .map(|(i, (tag, label, emoji, is_ramadan))| Hashtag {
            id: (i + 1).to_string(),
            tag: tag.to_string(),
            label: label.to_string(),
            emoji: emoji.to_string(),
            is_ramadan,
            order_index: i as i32,
        })
        .collect()
}

/// Default theater stage units
pub fn default_stage_units() -> Vec<StageUnit> {
    let entries: [(&str, &str, &str, &str, &[&str]); 3] = [
        (
            "JKT48 TN3",
            "Aitakatta",
            "#f43f5e",
            "#ec4899",
            &["Nageki no Figure", "Koi no PLAN", "Senaka Kara Dakishimete"],
        ),
        (
            "JKT48 TN1",
            "Pajama Drive",
            "#8b5cf6",
            "#a855f7",
            &["Pajama Drive", "Kagami no Naka no Jean Da Arc"],
        ),
        ("JKT48 TN SS1", "Kira Kira Girls", "#f59e0b", "#f97316", &["Candy"]),
    ];
    entries
        .into_iter()
        .enumerate()
        .map(|(i, (name, setlist, color_from, color_to, songs))| StageUnit {
            id: (i + 1).to_string(),
            name: name.to_string(),
            setlist: setlist.to_string(),
            color_from: color_from.to_string(),
            color_to: color_to.to_string(),
            songs: songs.iter().map(|s| s.to_string()).collect(),
            order_index: i as i32,
        })
        .collect()
}

// =============================================================================
// Overlay rules
// =============================================================================

/// Overlay store hashtags onto a default list
///
/// Keyed by tag text: a matching tag overrides the default entry, a new
/// tag is appended. The result is sorted by order index.
pub fn merge_hashtags(defaults: &[Hashtag], rows: Vec<Hashtag>) -> Vec<Hashtag> {
    let mut merged: Vec<Hashtag> = defaults.to_vec();
    for row in rows {
        match merged.iter_mut().find(|h| h.tag == row.tag) {
            Some(existing) => *existing = row,
            None => merged.push(row),
        }
    }
    merged.sort_by_key(|h| h.order_index);
    merged
}

/// Overlay store hashtags onto the built-in defaults
pub fn merged_hashtags(rows: Vec<Hashtag>) -> Vec<Hashtag> {
    merge_hashtags(&default_hashtags(), rows)
}

/// Store milestones if any exist, the defaults otherwise
pub fn milestones_or_default(rows: Vec<Milestone>) -> Vec<Milestone> {
    if rows.is_empty() {
        default_milestones()
    } else {
        rows
    }
}

/// Store fun facts if any exist, the defaults otherwise
pub fn fun_facts_or_default(rows: Vec<FunFact>) -> Vec<FunFact> {
    if rows.is_empty() {
        default_fun_facts()
    } else {
        rows
    }
}

/// Store stage units if any exist, the defaults otherwise
pub fn stage_units_or_default(rows: Vec<StageUnit>) -> Vec<StageUnit> {
    if rows.is_empty() {
        default_stage_units()
    } else {
        rows
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn tag(id: &str, text: &str, label: &str, order_index: i32) -> Hashtag {
        Hashtag {
            id: id.to_string(),
            tag: text.to_string(),
            label: label.to_string(),
            emoji: String::new(),
            is_ramadan: false,
            order_index,
        }
    }

    #[test]
    fn test_merge_overrides_retains_and_appends() {
        let defaults = vec![tag("1", "#A", "default a", 0), tag("2", "#B", "default b", 1)];
        let rows = vec![tag("10", "#A", "new", 0), tag("11", "#C", "appended", 2)];

        let merged = merge_hashtags(&defaults, rows);
        assert_eq!(merged.len(), 3);
        assert_eq!(merged[0].tag, "#A");
        assert_eq!(merged[0].label, "new"); // overridden
        assert_eq!(merged[1].tag, "#B");
        assert_eq!(merged[1].label, "default b"); // retained default
        assert_eq!(merged[2].tag, "#C"); // appended
    }

    #[test]
    fn test_merge_sorts_by_order_index() {
        let defaults = vec![tag("1", "#A", "a", 5)];
        let rows = vec![tag("10", "#B", "b", 0)];

        let merged = merge_hashtags(&defaults, rows);
        assert_eq!(merged[0].tag, "#B");
        assert_eq!(merged[1].tag, "#A");
    }

    #[test]
    fn test_merge_with_no_rows_is_defaults() {
        let defaults = default_hashtags();
        let merged = merged_hashtags(Vec::new());
        assert_eq!(merged, defaults);
    }

    #[test]
    fn test_defaults_are_ordered() {
        for (i, m) in default_milestones().iter().enumerate() {
            assert_eq!(m.order_index, i as i32);
        }
        for (i, h) in default_hashtags().iter().enumerate() {
            assert_eq!(h.order_index, i as i32);
        }
    }

    #[test]
    fn test_defaults_non_empty() {
        assert!(!default_milestones().is_empty());
        assert!(!default_fun_facts().is_empty());
        assert!(!default_hashtags().is_empty());
        assert!(!default_stage_units().is_empty());
    }

    #[test]
    fn test_or_default_prefers_store_rows() {
        let rows = vec![Milestone {
            id: "x".to_string(),
            year: "2026".to_string(),
            title: "Custom".to_string(),
            description: String::new(),
            order_index: 0,
        }];
        let result = milestones_or_default(rows.clone());
        assert_eq!(result, rows);

        assert_eq!(milestones_or_default(Vec::new()), default_milestones());
        assert_eq!(fun_facts_or_default(Vec::new()), default_fun_facts());
        assert_eq!(stage_units_or_default(Vec::new()), default_stage_units());
    }
}

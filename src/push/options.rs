//! String-token → native bitmask mapping for the SDK configuration setters.
//!
//! The runtime sends ordered arrays of option tokens; the SDK wants the
//! platform's raw option bits. Each table entry carries the minimum major OS
//! version that supports the token — tokens below it, and tokens the tables
//! do not know at all, contribute nothing and raise no error.

/// Raw `UNAuthorizationOptions` bits.
pub mod authorization {
    pub const BADGE: u32 = 1 << 0;
    pub const SOUND: u32 = 1 << 1;
    pub const ALERT: u32 = 1 << 2;
    pub const CAR_PLAY: u32 = 1 << 3;
    pub const CRITICAL_ALERT: u32 = 1 << 4;
    pub const PROVIDES_APP_NOTIFICATION_SETTINGS: u32 = 1 << 5;
    pub const PROVISIONAL: u32 = 1 << 6;
    pub const ANNOUNCEMENT: u32 = 1 << 7;
}

/// Raw `UNNotificationCategoryOptions` bits.
pub mod category {
    pub const CUSTOM_DISMISS_ACTION: u32 = 1 << 0;
    pub const ALLOW_IN_CAR_PLAY: u32 = 1 << 1;
    pub const HIDDEN_PREVIEWS_SHOW_TITLE: u32 = 1 << 2;
    pub const HIDDEN_PREVIEWS_SHOW_SUBTITLE: u32 = 1 << 3;
    pub const ALLOW_ANNOUNCEMENT: u32 = 1 << 4;
}

/// Raw `UNNotificationPresentationOptions` bits.
pub mod presentation {
    pub const BADGE: u32 = 1 << 0;
    pub const SOUND: u32 = 1 << 1;
    /// Legacy alert presentation, replaced by `BANNER`/`LIST` on v14+.
    pub const ALERT: u32 = 1 << 2;
    pub const LIST: u32 = 1 << 3;
    pub const BANNER: u32 = 1 << 4;
}

/// `(token, bit, minimum major OS version)`
type TokenTable = &'static [(&'static str, u32, u32)];

const AUTHORIZATION_TOKENS: TokenTable = &[
    ("alert", authorization::ALERT, 0),
    ("badge", authorization::BADGE, 0),
    ("sound", authorization::SOUND, 0),
    ("carPlay", authorization::CAR_PLAY, 0),
    (
        "providesAppNotificationSettings",
        authorization::PROVIDES_APP_NOTIFICATION_SETTINGS,
        12,
    ),
    ("provisional", authorization::PROVISIONAL, 12),
    ("criticalAlert", authorization::CRITICAL_ALERT, 12),
    ("announcement", authorization::ANNOUNCEMENT, 13),
];

const CATEGORY_TOKENS: TokenTable = &[
    ("customDismissAction", category::CUSTOM_DISMISS_ACTION, 0),
    ("allowInCarPlay", category::ALLOW_IN_CAR_PLAY, 0),
    ("hiddenPreviewsShowTitle", category::HIDDEN_PREVIEWS_SHOW_TITLE, 11),
    (
        "hiddenPreviewsShowSubtitle",
        category::HIDDEN_PREVIEWS_SHOW_SUBTITLE,
        11,
    ),
    ("allowAnnouncement", category::ALLOW_ANNOUNCEMENT, 13),
];

fn mask_from_table(table: TokenTable, tokens: &[String], os_major: u32) -> u32 {
    let mut mask = 0;
    for token in tokens {
        for (name, bit, min_version) in table {
            if token == name && os_major >= *min_version {
                mask |= bit;
            }
        }
    }
    mask
}

/// Map authorization option tokens to a `UNAuthorizationOptions` mask.
pub fn authorization_options(tokens: &[String], os_major: u32) -> u32 {
    mask_from_table(AUTHORIZATION_TOKENS, tokens, os_major)
}

/// Map category option tokens to a `UNNotificationCategoryOptions` mask.
pub fn category_options(tokens: &[String], os_major: u32) -> u32 {
    mask_from_table(CATEGORY_TOKENS, tokens, os_major)
}

/// Map presentation option tokens to a `UNNotificationPresentationOptions`
/// mask. v14 split the old alert presentation into banner and list: on v14+
/// both `banner` and `alert` select the banner bit and `list` selects the
/// list bit; below v14 only the legacy `alert` bit exists.
pub fn presentation_options(tokens: &[String], os_major: u32) -> u32 {
    let mut mask = 0;
    for token in tokens {
        if os_major >= 14 {
            if token == "banner" || token == "alert" {
                mask |= presentation::BANNER;
            }
            if token == "list" {
                mask |= presentation::LIST;
            }
        } else if token == "alert" {
            mask |= presentation::ALERT;
        }

        if token == "badge" {
            mask |= presentation::BADGE;
        }
        if token == "sound" {
            mask |= presentation::SOUND;
        }
    }
    mask
}

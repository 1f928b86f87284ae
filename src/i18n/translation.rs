//! Translation tables for the handful of labels the content core needs.

use super::Locales;

/// Translation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum I18nKey {
    Home,
    Archive,
    About,
    Tags,
    Categories,
    Uncategorized,
    RecentPosts,
    PrevPost,
    NextPost,
}

/// Labels for one language.
struct Translation {
    home: &'static str,
    archive: &'static str,
    about: &'static str,
    tags: &'static str,
    categories: &'static str,
    uncategorized: &'static str,
    recent_posts: &'static str,
    prev_post: &'static str,
    next_post: &'static str,
}

impl Translation {
    const fn get(&self, key: I18nKey) -> &'static str {
        match key {
            I18nKey::Home => self.home,
            I18nKey::Archive => self.archive,
            I18nKey::About => self.about,
            I18nKey::Tags => self.tags,
            I18nKey::Categories => self.categories,
            I18nKey::Uncategorized => self.uncategorized,
            I18nKey::RecentPosts => self.recent_posts,
            I18nKey::PrevPost => self.prev_post,
            I18nKey::NextPost => self.next_post,
        }
    }
}

const EN: Translation = Translation {
    home: "Home",
    archive: "Archive",
    about: "About",
    tags: "Tags",
    categories: "Categories",
    uncategorized: "Uncategorized",
    recent_posts: "Recent Posts",
    prev_post: "Previous Post",
    next_post: "Next Post",
};

const VI: Translation = Translation {
    home: "Trang chủ",
    archive: "Lưu trữ",
    about: "Giới thiệu",
    tags: "Thẻ",
    categories: "Danh mục",
    uncategorized: "Chưa phân loại",
    recent_posts: "Bài viết gần đây",
    prev_post: "Bài trước",
    next_post: "Bài tiếp theo",
};

fn table(lang: &str) -> Option<&'static Translation> {
    match lang.to_ascii_lowercase().as_str() {
        "en" => Some(&EN),
        "vi" => Some(&VI),
        _ => None,
    }
}

/// Look up `key` for `lang`.
///
/// Without an explicit `lang` the default locale is used. An unknown locale
/// falls back to the default locale's table, and finally to English.
pub fn i18n(key: I18nKey, lang: Option<&str>, locales: &Locales) -> &'static str {
    let lang = lang.unwrap_or_else(|| locales.default_locale());
    table(lang)
        .or_else(|| table(locales.default_locale()))
        .unwrap_or(&EN)
        .get(key)
}

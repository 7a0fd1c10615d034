//! Static UI strings
//!
//! English is the base table; Arabic entries override it. A key missing in
//! both resolves to the key itself so a typo is visible on the page.

use crate::enums::Language;
use once_cell::sync::Lazy;
use std::collections::HashMap;

type Table = HashMap<&'static str, &'static str>;

static EN: Lazy<Table> = Lazy::new(|| {
    HashMap::from([
        ("nav.home", "Home"),
        ("nav.about", "About"),
        ("nav.products", "Products"),
        ("nav.contact", "Contact"),
        ("products.title", "Our Products"),
        (
            "products.intro",
            "Browse our Lebanese product categories. Each item includes a description and ingredients.",
        ),
        ("products.singleServe", "Single Serve"),
        ("products.bulk", "Bulk"),
        ("products.search", "Search products..."),
        ("products.empty", "No products match your filters."),
        ("products.ingredients", "Ingredients"),
        ("products.variants", "Variants"),
        ("products.featured", "Featured"),
        ("products.suffix", "products"),
        ("filters.all", "All"),
        ("sections.featured", "Featured Products"),
        ("sections.bestsellers", "Bestsellers"),
        ("sections.newArrivals", "New Arrivals"),
        ("sections.seasonal", "Seasonal"),
        ("contact.title", "Contact Us"),
        ("contact.name", "Name"),
        ("contact.email", "Email"),
        ("contact.message", "Message"),
        ("contact.send", "Send"),
        ("contact.required", "Required"),
        ("contact.invalidEmail", "Invalid email"),
        ("contact.sent", "Message sent (demo). We will reply soon!"),
        ("status.loading", "Loading..."),
        (
            "status.loadFailed",
            "Some of the catalog could not be loaded. Showing saved content.",
        ),
    ])
});

static AR: Lazy<Table> = Lazy::new(|| {
    HashMap::from([
        ("nav.home", "الرئيسية"),
        ("nav.about", "من نحن"),
        ("nav.products", "المنتجات"),
        ("nav.contact", "اتصل بنا"),
        ("products.title", "منتجاتنا"),
        (
            "products.intro",
            "تصفح فئات منتجاتنا اللبنانية. كل صنف يتضمن وصفاً ومكونات.",
        ),
        ("products.singleServe", "منتجات فردية"),
        ("products.bulk", "منتجات بالجملة"),
        ("products.search", "ابحث عن المنتجات..."),
        ("products.ingredients", "المكونات"),
        ("filters.all", "الكل"),
        ("sections.featured", "منتجات مميزة"),
        ("sections.bestsellers", "الأكثر مبيعاً"),
        ("sections.newArrivals", "وصل حديثاً"),
        ("sections.seasonal", "موسمي"),
        ("contact.title", "اتصل بنا"),
        ("contact.name", "الاسم"),
        ("contact.email", "البريد الإلكتروني"),
        ("contact.message", "الرسالة"),
        ("contact.send", "إرسال"),
        ("status.loading", "جار التحميل..."),
        (
            "status.loadFailed",
            "تعذر تحميل جزء من الكتالوج. يتم عرض المحتوى المحفوظ.",
        ),
    ])
});

/// UI string for `key` in `lang`, falling back to English, then to the key
pub fn t(key: &'static str, lang: Language) -> &'static str {
    let localized = match lang {
        Language::Ar => AR.get(key).copied(),
        Language::En => None,
    };
    localized.or_else(|| EN.get(key).copied()).unwrap_or(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arabic_entry_used() {
        assert_eq!(t("nav.products", Language::Ar), "المنتجات");
        assert_eq!(t("nav.products", Language::En), "Products");
    }

    #[test]
    fn test_missing_arabic_falls_back_to_english() {
        assert_eq!(t("contact.invalidEmail", Language::Ar), "Invalid email");
    }

    #[test]
    fn test_unknown_key_returns_key() {
        assert_eq!(t("nav.unknown", Language::En), "nav.unknown");
    }

    #[test]
    fn test_every_arabic_key_has_english_base() {
        for key in AR.keys() {
            assert!(EN.contains_key(key), "missing English entry for {}", key);
        }
    }
}

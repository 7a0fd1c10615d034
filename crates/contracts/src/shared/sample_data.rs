//! Built-in content
//!
//! Rendered before (or instead of) remote data, and the source of the
//! admin's "import defaults" and default hero/about actions.

use crate::domain::a001_main_category::aggregate::MainCategory;
use crate::domain::a002_subcategory::aggregate::Subcategory;
use crate::domain::a004_section::aggregate::Section;
use crate::shared::catalog::localization::{LocalizedList, LocalizedText};
use crate::shared::catalog::model::{
    resolve_image, Catalog, CatalogProduct, MainCategoryEntry, SectionEntry, DEFAULT_BANNER,
    DEFAULT_BANNER_KEY,
};
use crate::shared::catalog::registry::SubcategoryRegistry;
use std::collections::BTreeMap;

const SINGLE_SUBCATEGORIES: [&str; 15] = [
    "fresh veges",
    "fresh pickles",
    "ordinary pickles",
    "olives",
    "olive oil",
    "labne & kishik",
    "pastes",
    "molases",
    "hydrosols",
    "natural syrubs",
    "tahhene",
    "vinegar",
    "herbal",
    "kamar el din",
    "ready to serve",
];

const BULK_SUBCATEGORIES: [&str; 14] = [
    "fresh veges",
    "fresh pickles",
    "ordinary pickles",
    "olives",
    "olive oil",
    "sunflower oil",
    "kishik",
    "pastes",
    "molases",
    "hydrosols",
    "tahhene",
    "vinegar",
    "herbal",
    "kamar el din",
];

/// `single` / `bulk`, used when the main categories table is empty or unreachable
pub fn default_main_categories() -> Vec<MainCategory> {
    vec![
        MainCategory::new("single", "Single Serve", "منتجات فردية", 1),
        MainCategory::new("bulk", "Bulk", "منتجات بالجملة", 2),
    ]
}

/// Subcategory rows upserted by the admin's import action.
///
/// Slugs are the table key, so the bulk rows carry a `-bulk` suffix where the
/// name is shared with a single-serve row.
pub fn default_subcategories() -> Vec<Subcategory> {
    let single = [
        ("fresh-veges", "Fresh Vegetables", "خضار طازجة"),
        ("fresh-pickles", "Fresh Pickles", "مخللات طازجة"),
        ("ordinary-pickles", "Ordinary Pickles", "مخللات عادية"),
        ("olives", "Olives", "زيتون"),
        ("olive-oil", "Olive Oil", "زيت زيتون"),
        ("labne-kishik", "Labne & Kishik", "لبنة وكشك"),
        ("pastes", "Pastes", "معجون"),
        ("molases", "Molasses", "دبس"),
        ("hydrosols", "Hydrosols", "ماء الورد"),
        ("natural-syrubs", "Natural Syrups", "شراب طبيعي"),
        ("tahhene", "Tahini", "طحينة"),
        ("vinegar", "Vinegar", "خل"),
        ("herbal", "Herbal", "أعشاب"),
        ("kamar-el-din", "Kamar El Din", "قمر الدين"),
        ("ready-to-serve", "Ready to Serve", "جاهز للتقديم"),
    ];
    let bulk = [
        ("fresh-veges-bulk", "Fresh Vegetables", "خضار طازجة"),
        ("fresh-pickles-bulk", "Fresh Pickles", "مخللات طازجة"),
        ("ordinary-pickles-bulk", "Ordinary Pickles", "مخللات عادية"),
        ("olives-bulk", "Olives", "زيتون"),
        ("olive-oil-bulk", "Olive Oil", "زيت زيتون"),
        ("sunflower-oil", "Sunflower Oil", "زيت دوار الشمس"),
        ("kishik-bulk", "Kishik", "كشك"),
        ("pastes-bulk", "Pastes", "معجون"),
        ("molases-bulk", "Molasses", "دبس"),
        ("hydrosols-bulk", "Hydrosols", "ماء الورد"),
        ("tahhene-bulk", "Tahini", "طحينة"),
        ("vinegar-bulk", "Vinegar", "خل"),
        ("herbal-bulk", "Herbal", "أعشاب"),
        ("kamar-el-din-bulk", "Kamar El Din", "قمر الدين"),
    ];

    let rows = |main: &str, list: &[(&str, &str, &str)]| -> Vec<Subcategory> {
        list.iter()
            .enumerate()
            .map(|(i, (slug, en, ar))| Subcategory::new(slug, main, en, ar, i as i32 + 1))
            .collect()
    };
    let mut all = rows("single", &single);
    all.extend(rows("bulk", &bulk));
    all
}

/// Hero and about rows created on the first dashboard visit when missing
pub fn default_sections() -> Vec<Section> {
    vec![
        Section::new(
            "hero",
            "Welcome to Karam Libnan",
            "مرحباً بكم في كرم لبنان",
            "Authentic Homemade & Canned Lebanese Products. Crafted with passion, tradition, and the richness of Lebanon's natural bounty.",
            "منتجات لبنانية أصيلة محضرة في المنزل ومعلبة. مصنوعة بشغف وتقليد وثراء الطبيعة اللبنانية.",
        ),
        Section::new(
            "about",
            "Our Story",
            "قصتنا",
            "Karam Libnan was born from a love for authentic Lebanese flavors passed down through generations.",
            "ولدت كرم لبنان من حب النكهات اللبنانية الأصيلة المتوارثة عبر الأجيال.",
        ),
    ]
}

fn item(
    id: u32,
    name: &str,
    main_type: &str,
    sub: &str,
    featured: bool,
    image: &str,
    description: &str,
    ingredients: &[&str],
) -> CatalogProduct {
    let ingredients: Vec<String> = ingredients.iter().map(|s| s.to_string()).collect();
    CatalogProduct {
        id: id.to_string(),
        name: LocalizedText::same(name),
        description: LocalizedText::same(description),
        main_type: main_type.to_string(),
        sub: sub.to_string(),
        image: resolve_image(Some(image)),
        ingredients: LocalizedList::new(&ingredients, &[]),
        variants: LocalizedList::default(),
        tags: LocalizedList::default(),
        featured,
        sort_order: None,
        sections: vec![],
    }
}

fn sample_products() -> Vec<CatalogProduct> {
    vec![
        item(
            1,
            "Homemade Fig Jam",
            "single",
            "pastes",
            true,
            "https://images.unsplash.com/photo-1601004890684-d8cbf643f5f2?auto=format&fit=crop&w=800&q=80",
            "Rich, slow-cooked fig jam with subtle sweetness.",
            &["Figs", "Organic Cane Sugar", "Lemon Juice"],
        ),
        item(
            2,
            "Pickled Cucumbers",
            "single",
            "ordinary pickles",
            true,
            "https://images.unsplash.com/photo-1621378580334-79a6845bb3e7?auto=format&fit=crop&w=800&q=80",
            "Crisp and tangy traditional Lebanese pickles.",
            &["Cucumbers", "Vinegar", "Sea Salt", "Garlic", "Dill"],
        ),
        item(
            3,
            "Herbal Thyme Blend (Za'atar)",
            "single",
            "herbal",
            true,
            "https://silkroadrecipes.com/wp-content/uploads/2020/07/Zaatar-Spice-Blend-square.jpg",
            "Fragrant mountain thyme mix, perfect with olive oil & bread.",
            &["Thyme", "Sesame Seeds", "Sumac", "Salt"],
        ),
        item(
            4,
            "Orange Blossom Honey",
            "single",
            "natural syrubs",
            false,
            "https://images.unsplash.com/photo-1471943311424-646960669fbc?auto=format&fit=crop&w=800&q=80",
            "Raw honey infused with orange blossom aromas.",
            &["Pure Honey", "Orange Blossom Essence"],
        ),
        item(
            5,
            "Stuffed Vine Leaves",
            "single",
            "ready to serve",
            false,
            "https://plus.unsplash.com/premium_photo-1676964403940-a301447aeb3f?auto=format&fit=crop&w=800&q=80",
            "Hand-rolled vine leaves with aromatic rice filling.",
            &["Vine Leaves", "Rice", "Onion", "Olive Oil", "Herbs"],
        ),
        item(
            6,
            "Rose Petal Jam",
            "single",
            "pastes",
            false,
            "https://images.unsplash.com/photo-1510626176961-4b57d4fbad03?auto=format&fit=crop&w=800&q=80",
            "Delicate jam capturing the essence of rose petals.",
            &["Rose Petals", "Sugar", "Lemon Juice"],
        ),
        item(
            7,
            "Pomegranate Molasses",
            "single",
            "molases",
            false,
            "https://www.marthastewart.com/thmb/hqfqo5wjANUxa7VbsaOxqS7xIjk=/750x0/filters:no_upscale():max_bytes(150000):strip_icc():format(webp)/ms-pomegranate-molasses-getty-0b12cb3cd1294ecbb86468a517437d5c.jpg",
            "Thick, tangy reduction ideal for dressings & marinades.",
            &["Pomegranate Juice", "Natural Sugar", "Lemon"],
        ),
        item(
            8,
            "Spiced Olive Mix",
            "single",
            "olives",
            false,
            "https://www.olivemypickle.com/cdn/shop/files/PDP-olives_22.png?v=1725545524",
            "Marinated olives with herbs and mild spice.",
            &["Olives", "Olive Oil", "Herbs", "Spices"],
        ),
        item(
            9,
            "Carob Molasses",
            "single",
            "molases",
            false,
            "https://static.ticimax.cloud/cdn-cgi/image/width=370,quality=85/13473/uploads/urunresimleri/buyuk/bal-pekmezdupnisa-ciftligiharnup-pekme-9-3fb3.png",
            "Natural sweetener with deep caramel-like flavor.",
            &["Carob Pods", "Water"],
        ),
        item(
            10,
            "Fresh Mountain Cucumbers",
            "single",
            "fresh veges",
            false,
            "https://placehold.co/400x300?text=Fresh+Cucumbers",
            "Crisp organically-grown mountain cucumbers.",
            &["Cucumber"],
        ),
        item(
            11,
            "Fresh Pickled Turnips",
            "single",
            "fresh pickles",
            false,
            "https://placehold.co/400x300?text=Fresh+Pickles",
            "Bright pink turnips pickled same-day for crunch.",
            &["Turnip", "Beet", "Salt", "Vinegar"],
        ),
        item(
            12,
            "Extra Virgin Olive Oil 250ml",
            "single",
            "olive oil",
            false,
            "https://placehold.co/400x300?text=Olive+Oil",
            "Cold-pressed early harvest extra virgin olive oil.",
            &["Olives"],
        ),
        item(
            13,
            "Labne & Sun-Dried Kishik Duo",
            "single",
            "labne & kishik",
            false,
            "https://placehold.co/400x300?text=Labne+&+Kishik",
            "Creamy labne with a side of powdered kishik.",
            &["Labne", "Fermented Yogurt Grain (Kishik)", "Salt"],
        ),
        item(
            14,
            "Wild Rose Hydrosol",
            "single",
            "hydrosols",
            false,
            "https://placehold.co/400x300?text=Hydrosol",
            "Steam-distilled wild rose floral water.",
            &["Rose Petals", "Spring Water"],
        ),
        item(
            16,
            "Stone-Ground Tahhene Jar",
            "single",
            "tahhene",
            false,
            "https://placehold.co/400x300?text=Tahini",
            "Sesame tahini ground on traditional stones.",
            &["Sesame Seeds"],
        ),
        item(
            18,
            "Apricot Leather (Kamar El Din)",
            "single",
            "kamar el din",
            false,
            "https://placehold.co/400x300?text=Kamar+El+Din",
            "Traditional sun-dried apricot fruit leather.",
            &["Apricots"],
        ),
        item(
            22,
            "Bulk Mixed Olives 8kg",
            "bulk",
            "olives",
            false,
            "https://placehold.co/400x300?text=Bulk+Olives",
            "Assorted cured olives in brine and herbs.",
            &["Olives", "Brine", "Herbs"],
        ),
        item(
            23,
            "Bulk Extra Virgin Olive Oil 16L",
            "bulk",
            "olive oil",
            false,
            "https://placehold.co/400x300?text=Bulk+Olive+Oil",
            "Tin container of cold-pressed EVOO for restaurants.",
            &["Olives"],
        ),
        item(
            24,
            "Bulk Sunflower Oil 20L",
            "bulk",
            "sunflower oil",
            false,
            "https://placehold.co/400x300?text=Sunflower+Oil",
            "High-quality refined sunflower oil for frying & cooking.",
            &["Sunflower Seeds"],
        ),
        item(
            25,
            "Bulk Kishik Powder 5kg",
            "bulk",
            "kishik",
            false,
            "https://placehold.co/400x300?text=Kishik",
            "Fermented yogurt & cracked wheat powder large pack.",
            &["Fermented Yogurt", "Cracked Wheat", "Salt"],
        ),
        item(
            27,
            "Bulk Pomegranate Molasses 5L",
            "bulk",
            "molases",
            false,
            "https://placehold.co/400x300?text=Pomegranate+Molasses",
            "Economy container for sauce production and marinades.",
            &["Pomegranate Juice"],
        ),
        item(
            30,
            "Bulk Tahhene 10kg Pail",
            "bulk",
            "tahhene",
            false,
            "https://placehold.co/400x300?text=Tahini+Bulk",
            "Large pail of stone-ground tahini.",
            &["Sesame Seeds"],
        ),
    ]
}

/// Catalog shown before the first remote load completes
pub fn sample_catalog() -> Catalog {
    let mut lists = BTreeMap::new();
    lists.insert(
        "single".to_string(),
        SINGLE_SUBCATEGORIES.iter().map(|s| s.to_string()).collect(),
    );
    lists.insert(
        "bulk".to_string(),
        BULK_SUBCATEGORIES.iter().map(|s| s.to_string()).collect(),
    );

    let mut banners = BTreeMap::new();
    banners.insert(DEFAULT_BANNER_KEY.to_string(), DEFAULT_BANNER.to_string());

    Catalog {
        main_categories: default_main_categories()
            .iter()
            .map(MainCategoryEntry::from)
            .collect(),
        registry: SubcategoryRegistry::from_keys(&lists),
        products: sample_products(),
        sections: default_sections().iter().map(SectionEntry::from).collect(),
        banners,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::Language;

    #[test]
    fn test_sample_products_fit_registry() {
        let catalog = sample_catalog();
        for product in &catalog.products {
            assert!(
                catalog.registry.contains(&product.main_type, &product.sub),
                "{} has unknown subcategory {}",
                product.name.en,
                product.sub
            );
        }
    }

    #[test]
    fn test_default_tabs() {
        let catalog = sample_catalog();
        assert_eq!(catalog.default_main_type(), "single");
        assert_eq!(
            catalog.main_category("bulk").unwrap().title.get(Language::Ar),
            "منتجات بالجملة"
        );
    }

    #[test]
    fn test_default_subcategory_slugs_unique() {
        let rows = default_subcategories();
        let mut slugs: Vec<&str> = rows.iter().map(|r| r.slug.as_str()).collect();
        slugs.sort();
        slugs.dedup();
        assert_eq!(slugs.len(), rows.len());
        assert!(rows.iter().all(|r| r.slug != "all"));
    }

    #[test]
    fn test_default_sections() {
        let sections = default_sections();
        assert_eq!(sections[0].key, "hero");
        assert_eq!(sections[1].title_en.as_deref(), Some("Our Story"));
    }
}

use chrono::{NaiveDateTime, Utc};

use crate::repository::{CategoryReader, ProductListQuery, ProductReader, RepositoryResult};

/// Hint to crawlers about how often a URL changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeFrequency {
    Daily,
    Weekly,
    Monthly,
}

impl ChangeFrequency {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }
}

/// One `<url>` element of the sitemap.
#[derive(Debug, Clone, PartialEq)]
pub struct SitemapEntry {
    pub url: String,
    pub last_modified: NaiveDateTime,
    pub change_frequency: ChangeFrequency,
    pub priority: f32,
}

/// A robots.txt rule block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RobotsRule {
    pub user_agent: String,
    pub allow: Vec<String>,
    pub disallow: Vec<String>,
}

/// The whole robots.txt document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Robots {
    pub rules: Vec<RobotsRule>,
    pub sitemap: String,
}

fn static_entries(base_url: &str, now: NaiveDateTime) -> Vec<SitemapEntry> {
    let entry = |path: &str, change_frequency, priority| SitemapEntry {
        url: format!("{base_url}{path}"),
        last_modified: now,
        change_frequency,
        priority,
    };

    vec![
        entry("", ChangeFrequency::Daily, 1.0),
        entry("/products", ChangeFrequency::Daily, 0.9),
        entry("/admin", ChangeFrequency::Monthly, 0.5),
        entry("/links", ChangeFrequency::Weekly, 0.6),
        entry("/qr", ChangeFrequency::Monthly, 0.8),
    ]
}

/// Builds the sitemap entry list: the fixed static routes first, then one
/// entry per product and per category.
///
/// When the data source is unreachable (offline builds, fresh deploys) the
/// static routes are still returned instead of failing the whole document.
pub fn build_sitemap<R>(base_url: &str, repo: &R) -> Vec<SitemapEntry>
where
    R: ProductReader + CategoryReader,
{
    let now = Utc::now().naive_utc();
    let mut entries = static_entries(base_url, now);

    let dynamic: RepositoryResult<_> = (|| {
        let products = repo.list_products(ProductListQuery::default())?;
        let categories = repo.list_categories()?;
        Ok((products, categories))
    })();

    let (products, categories) = match dynamic {
        Ok(dynamic) => dynamic,
        Err(e) => {
            log::error!("Failed to fetch sitemap data: {e}");
            return entries;
        }
    };

    entries.extend(products.into_iter().map(|product| SitemapEntry {
        url: format!("{base_url}/products/{}", product.slug),
        last_modified: product.updated_at,
        change_frequency: ChangeFrequency::Weekly,
        priority: 0.8,
    }));

    entries.extend(categories.into_iter().map(|category| SitemapEntry {
        url: format!("{base_url}/products?category={}", category.slug),
        last_modified: category.updated_at,
        change_frequency: ChangeFrequency::Weekly,
        priority: 0.7,
    }));

    entries
}

/// Builds the robots.txt document: everything is crawlable except the API
/// prefix and the admin area.
pub fn build_robots(base_url: &str) -> Robots {
    Robots {
        rules: vec![RobotsRule {
            user_agent: "*".to_string(),
            allow: vec!["/".to_string()],
            disallow: vec!["/api/".to_string(), "/admin".to_string()],
        }],
        sitemap: format!("{base_url}/sitemap.xml"),
    }
}

fn xml_escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Renders the entries as a sitemap.org urlset document.
pub fn render_sitemap_xml(entries: &[SitemapEntry]) -> String {
    let mut out = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );
    for entry in entries {
        out.push_str("  <url>\n");
        out.push_str(&format!("    <loc>{}</loc>\n", xml_escape(&entry.url)));
        out.push_str(&format!(
            "    <lastmod>{}</lastmod>\n",
            entry.last_modified.format("%Y-%m-%d")
        ));
        out.push_str(&format!(
            "    <changefreq>{}</changefreq>\n",
            entry.change_frequency.as_str()
        ));
        out.push_str(&format!("    <priority>{:.1}</priority>\n", entry.priority));
        out.push_str("  </url>\n");
    }
    out.push_str("</urlset>\n");
    out
}

/// Renders the robots document as plain text.
pub fn render_robots_txt(robots: &Robots) -> String {
    let mut out = String::new();
    for rule in &robots.rules {
        out.push_str(&format!("User-agent: {}\n", rule.user_agent));
        for allow in &rule.allow {
            out.push_str(&format!("Allow: {allow}\n"));
        }
        for disallow in &rule.disallow {
            out.push_str(&format!("Disallow: {disallow}\n"));
        }
        out.push('\n');
    }
    out.push_str(&format!("Sitemap: {}\n", robots.sitemap));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::category::NewCategory;
    use crate::domain::product::{NewProduct, ProductFields};
    use crate::domain::types::{
        CategoryId, CategoryName, ProductPrice, StockCount, StockThreshold,
    };
    use crate::repository::test::TestRepository;
    use crate::repository::{CategoryWriter, ProductWriter};

    const BASE: &str = "https://shop.example.com";

    fn sample_category(slug: &str) -> NewCategory {
        NewCategory {
            slug: slug.try_into().unwrap(),
            name: CategoryName::new("Category").unwrap(),
            description: None,
            image: None,
            position: 0,
        }
    }

    fn sample_product(slug: &str, category_id: CategoryId) -> NewProduct {
        NewProduct {
            slug: slug.try_into().unwrap(),
            fields: ProductFields {
                name: "Product".try_into().unwrap(),
                price: ProductPrice::new(10.0).unwrap(),
                description: None,
                ai_description: None,
                tags: vec![],
                category_id,
                stock_count: StockCount::new(10).unwrap(),
                low_stock_threshold: StockThreshold::new(5).unwrap(),
                featured: false,
                model_url: None,
                metadata: None,
            },
            images: vec![],
            videos: vec![],
        }
    }

    #[test]
    fn includes_products_and_categories() {
        let repo = TestRepository::new();
        let category = repo.create_category(&sample_category("chairs")).unwrap();
        repo.create_product(&sample_product("office-chair", category.id))
            .unwrap();

        let entries = build_sitemap(BASE, &repo);

        assert_eq!(entries.len(), 7);
        assert!(
            entries
                .iter()
                .any(|e| e.url == format!("{BASE}/products/office-chair") && e.priority == 0.8)
        );
        assert!(
            entries
                .iter()
                .any(|e| e.url == format!("{BASE}/products?category=chairs") && e.priority == 0.7)
        );
    }

    #[test]
    fn degrades_to_static_routes_when_reads_fail() {
        let repo = TestRepository::failing();

        let entries = build_sitemap(BASE, &repo);

        let urls: Vec<&str> = entries.iter().map(|e| e.url.as_str()).collect();
        assert_eq!(
            urls,
            vec![
                "https://shop.example.com",
                "https://shop.example.com/products",
                "https://shop.example.com/admin",
                "https://shop.example.com/links",
                "https://shop.example.com/qr",
            ]
        );
    }

    #[test]
    fn robots_blocks_api_and_admin() {
        let robots = build_robots(BASE);
        let text = render_robots_txt(&robots);

        assert!(text.contains("User-agent: *"));
        assert!(text.contains("Allow: /\n"));
        assert!(text.contains("Disallow: /api/"));
        assert!(text.contains("Disallow: /admin"));
        assert!(text.contains("Sitemap: https://shop.example.com/sitemap.xml"));
    }

    #[test]
    fn sitemap_xml_is_well_formed_enough() {
        let repo = TestRepository::new();
        let xml = render_sitemap_xml(&build_sitemap(BASE, &repo));

        assert!(xml.starts_with("<?xml"));
        assert_eq!(xml.matches("<url>").count(), 5);
        assert_eq!(xml.matches("</url>").count(), 5);
        assert!(xml.contains("<changefreq>daily</changefreq>"));
        assert!(xml.ends_with("</urlset>\n"));
    }
}

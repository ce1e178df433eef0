use chrono::{DateTime, TimeZone, Utc};
use ni_core::{Article, Category};

fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

fn tags(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|t| t.to_string()).collect()
}

/// Demo collection the `memory` backend starts from.
pub fn seed_articles() -> Vec<Article> {
    vec![
        Article {
            id: "1".to_string(),
            title: "Digital Connectivity Trends Show Unexpected Social Benefits".to_string(),
            excerpt: "New research reveals how modern digital platforms are reshaping human \
                      connections in ways experts didn't anticipate..."
                .to_string(),
            content: "Full article content here...".to_string(),
            author: "Dr. Sarah Mitchell".to_string(),
            published_at: date(2024, 1, 15),
            created_at: date(2024, 1, 15),
            updated_at: date(2024, 1, 15),
            tags: tags(&["digital-trends", "technology", "social-research"]),
            category: Category::Technology,
            is_archived: false,
            views: 15420,
            likes: 892,
            shares: 234,
            comments: 156,
            engagement_score: 8.5,
            priority_score: 9.2,
            slug: "digital-connectivity-social-benefits".to_string(),
            featured_image: Some(
                "https://images.pexels.com/photos/1183266/pexels-photo-1183266.jpeg".to_string(),
            ),
            is_featured: Some(true),
            is_breaking: Some(false),
        },
        Article {
            id: "2".to_string(),
            title: "Workplace Innovation Patterns in Remote vs Office Environments".to_string(),
            excerpt: "Comprehensive analysis reveals significant differences in creative output \
                      between remote and traditional office settings..."
                .to_string(),
            content: "Full article content here...".to_string(),
            author: "Prof. Marcus Chen".to_string(),
            published_at: date(2024, 1, 14),
            created_at: date(2024, 1, 14),
            updated_at: date(2024, 1, 14),
            tags: tags(&["workplace-research", "productivity", "business-analysis"]),
            category: Category::Business,
            is_archived: false,
            views: 12890,
            likes: 567,
            shares: 189,
            comments: 234,
            engagement_score: 9.1,
            priority_score: 8.7,
            slug: "workplace-innovation-remote-office-analysis".to_string(),
            featured_image: None,
            is_featured: None,
            is_breaking: Some(true),
        },
        Article {
            id: "3".to_string(),
            title: "Generational Perspectives: Understanding Modern Workplace Values".to_string(),
            excerpt: "Research into generational differences reveals important insights \
                      about evolving workplace priorities and social values..."
                .to_string(),
            content: "Full article content here...".to_string(),
            author: "Dr. Alex Rivera".to_string(),
            published_at: date(2024, 1, 13),
            created_at: date(2024, 1, 13),
            updated_at: date(2024, 1, 13),
            tags: tags(&["generational-studies", "workplace-culture", "social-research"]),
            category: Category::Society,
            is_archived: false,
            views: 18750,
            likes: 1234,
            shares: 345,
            comments: 567,
            engagement_score: 8.8,
            priority_score: 9.5,
            slug: "generational-workplace-values-analysis".to_string(),
            featured_image: None,
            is_featured: Some(true),
            is_breaking: None,
        },
    ]
}

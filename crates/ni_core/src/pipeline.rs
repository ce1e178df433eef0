use serde::Serialize;

use crate::types::{Article, FilterOptions, SortBy};

/// Runs the category filter and sort over `articles` and returns a fresh
/// sequence. The source slice is left untouched.
pub fn query(articles: &[Article], options: &FilterOptions) -> Vec<Article> {
    let mut result: Vec<Article> = if options.is_all_categories() {
        articles.to_vec()
    } else {
        let wanted = options.category.trim();
        articles
            .iter()
            .filter(|article| article.category.as_str().eq_ignore_ascii_case(wanted))
            .cloned()
            .collect()
    };

    if let Some(sort_by) = options.sort_by {
        sort_articles(&mut result, sort_by);
    }

    result
}

/// Stable in-place sort. `Breaking` is a two-group partition, not a key.
pub fn sort_articles(articles: &mut [Article], sort_by: SortBy) {
    match sort_by {
        SortBy::Newest => articles.sort_by(|a, b| b.published_at.cmp(&a.published_at)),
        SortBy::Featured => articles.sort_by(|a, b| b.priority_score.total_cmp(&a.priority_score)),
        SortBy::Breaking => articles.sort_by_key(|article| !article.breaking()),
        SortBy::Popular => articles.sort_by(|a, b| b.views.cmp(&a.views)),
    }
}

/// Home feed split into disjoint groups. Breaking wins over featured.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FeedSections {
    pub breaking: Vec<Article>,
    pub featured: Vec<Article>,
    pub regular: Vec<Article>,
}

impl FeedSections {
    pub fn len(&self) -> usize {
        self.breaking.len() + self.featured.len() + self.regular.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub fn group_sections(articles: &[Article]) -> FeedSections {
    let mut sections = FeedSections::default();
    for article in articles {
        let bucket = if article.breaking() {
            &mut sections.breaking
        } else if article.featured() {
            &mut sections.featured
        } else {
            &mut sections.regular
        };
        bucket.push(article.clone());
    }
    sections
}

pub fn find_by_slug<'a>(articles: &'a [Article], slug: &str) -> Option<&'a Article> {
    articles.iter().find(|article| article.slug == slug)
}

/// Other articles from the same category, in collection order.
pub fn related_articles<'a>(
    articles: &'a [Article],
    article: &Article,
    limit: usize,
) -> Vec<&'a Article> {
    articles
        .iter()
        .filter(|other| other.id != article.id && other.category == article.category)
        .take(limit)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Category, TimeRange};
    use chrono::{Duration, TimeZone, Utc};

    fn article(id: &str, category: Category) -> Article {
        let at = Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap();
        Article {
            id: id.to_string(),
            title: format!("Article {}", id),
            excerpt: String::new(),
            content: String::new(),
            author: "Test Author".to_string(),
            published_at: at,
            created_at: at,
            updated_at: at,
            tags: vec![],
            category,
            is_archived: false,
            views: 0,
            likes: 0,
            shares: 0,
            comments: 0,
            engagement_score: 0.0,
            priority_score: 0.0,
            slug: format!("article-{}", id),
            featured_image: None,
            is_featured: None,
            is_breaking: None,
        }
    }

    fn ids(articles: &[Article]) -> Vec<&str> {
        articles.iter().map(|a| a.id.as_str()).collect()
    }

    fn unsorted(category: &str) -> FilterOptions {
        FilterOptions {
            category: category.to_string(),
            sort_by: None,
            time_range: TimeRange::All,
        }
    }

    #[test]
    fn test_all_category_is_noop_filter() {
        let articles = vec![
            article("1", Category::Health),
            article("2", Category::Politics),
            article("3", Category::Health),
        ];
        assert_eq!(ids(&query(&articles, &unsorted("all"))), vec!["1", "2", "3"]);
        assert_eq!(ids(&query(&articles, &unsorted("ALL"))), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_category_filter_is_case_insensitive_and_complete() {
        let articles = vec![
            article("1", Category::Health),
            article("2", Category::Politics),
            article("3", Category::Health),
        ];
        let result = query(&articles, &unsorted("health"));
        assert_eq!(ids(&result), vec!["1", "3"]);
        assert!(result.iter().all(|a| a.category == Category::Health));
    }

    #[test]
    fn test_unknown_category_yields_empty() {
        let articles = vec![article("1", Category::Health)];
        assert!(query(&articles, &unsorted("sports")).is_empty());
        assert!(query(&[], &FilterOptions::default()).is_empty());
    }

    #[test]
    fn test_newest_sorts_descending() {
        let mut a = article("a", Category::Business);
        let mut b = article("b", Category::Business);
        let c = article("c", Category::Business);
        a.published_at = c.published_at - Duration::days(2);
        b.published_at = c.published_at + Duration::days(1);
        let result = query(&[a, b, c], &FilterOptions::default().with_sort(SortBy::Newest));
        assert_eq!(ids(&result), vec!["b", "c", "a"]);
        assert!(result.windows(2).all(|w| w[0].published_at >= w[1].published_at));
    }

    #[test]
    fn test_featured_sorts_by_priority() {
        let scores = [9.2, 8.7, 9.5];
        let articles: Vec<Article> = scores
            .iter()
            .enumerate()
            .map(|(i, score)| {
                let mut a = article(&i.to_string(), Category::Society);
                a.priority_score = *score;
                a
            })
            .collect();
        let result = query(&articles, &FilterOptions::default());
        let sorted: Vec<f64> = result.iter().map(|a| a.priority_score).collect();
        assert_eq!(sorted, vec![9.5, 9.2, 8.7]);
    }

    #[test]
    fn test_popular_sorts_by_views() {
        let mut articles = vec![
            article("1", Category::Technology),
            article("2", Category::Technology),
            article("3", Category::Technology),
        ];
        articles[0].views = 15420;
        articles[1].views = 12890;
        articles[2].views = 18750;
        let result = query(&articles, &FilterOptions::default().with_sort(SortBy::Popular));
        assert_eq!(ids(&result), vec!["3", "1", "2"]);
        assert!(result.windows(2).all(|w| w[0].views >= w[1].views));
    }

    #[test]
    fn test_breaking_is_stable_partition() {
        let mut x = article("x", Category::Politics);
        let y = article("y", Category::Politics);
        let mut z = article("z", Category::Politics);
        x.is_breaking = Some(true);
        z.is_breaking = Some(true);
        let result = query(&[x, y, z], &FilterOptions::default().with_sort(SortBy::Breaking));
        assert_eq!(ids(&result), vec!["x", "z", "y"]);
    }

    #[test]
    fn test_query_does_not_mutate_source() {
        let mut articles = vec![article("1", Category::Health), article("2", Category::Health)];
        articles[1].views = 10;
        let _ = query(&articles, &FilterOptions::default().with_sort(SortBy::Popular));
        assert_eq!(ids(&articles), vec!["1", "2"]);
    }

    #[test]
    fn test_group_sections_precedence() {
        let mut both = article("both", Category::Health);
        both.is_breaking = Some(true);
        both.is_featured = Some(true);
        let mut featured = article("featured", Category::Health);
        featured.is_featured = Some(true);
        let plain = article("plain", Category::Health);
        let mut breaking = article("breaking", Category::Health);
        breaking.is_breaking = Some(true);

        let sections = group_sections(&[both, featured, plain, breaking]);
        assert_eq!(ids(&sections.breaking), vec!["both", "breaking"]);
        assert_eq!(ids(&sections.featured), vec!["featured"]);
        assert_eq!(ids(&sections.regular), vec!["plain"]);
        assert_eq!(sections.len(), 4);
    }

    #[test]
    fn test_related_articles() {
        let articles = vec![
            article("1", Category::Health),
            article("2", Category::Health),
            article("3", Category::Politics),
            article("4", Category::Health),
            article("5", Category::Health),
            article("6", Category::Health),
        ];
        let related = related_articles(&articles, &articles[0], 3);
        let related_ids: Vec<&str> = related.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(related_ids, vec!["2", "4", "5"]);
    }

    #[test]
    fn test_find_by_slug() {
        let articles = vec![article("1", Category::Health), article("2", Category::Health)];
        assert_eq!(find_by_slug(&articles, "article-2").map(|a| a.id.as_str()), Some("2"));
        assert!(find_by_slug(&articles, "missing").is_none());
    }
}

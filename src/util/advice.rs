//! Static advisory texts shown next to each analyzed tag. Fixed per tag,
//! independent of the inspected page.

pub struct TagAdvice {
    pub recommendation: &'static str,
    pub example: &'static str,
}

pub const TITLE: TagAdvice = TagAdvice {
    recommendation: "Create a unique, descriptive title between 50-60 characters that includes your main keyword near the beginning.",
    example: "SEO Meta Tag Analyzer | Free Tool for Website Optimization",
};

pub const DESCRIPTION: TagAdvice = TagAdvice {
    recommendation: "Write a compelling meta description between 120-155 characters that accurately summarizes your page and includes a call-to-action.",
    example: "Analyze your website's meta tags instantly with our free SEO tool. Get detailed recommendations to improve your search engine visibility. Try it now!",
};

pub const KEYWORDS: TagAdvice = TagAdvice {
    recommendation: "While less important for modern SEO, include 5-10 relevant keywords that accurately describe your page content.",
    example: "seo analyzer, meta tags, seo tools, website optimization, meta description",
};

pub const VIEWPORT: TagAdvice = TagAdvice {
    recommendation: "Ensure your page is mobile-friendly by including a proper viewport meta tag.",
    example: r#"<meta name="viewport" content="width=device-width, initial-scale=1.0">"#,
};

pub const ROBOTS: TagAdvice = TagAdvice {
    recommendation: "Configure the robots meta tag to control how search engines interact with your page.",
    example: r#"<meta name="robots" content="index, follow">"#,
};

pub const OPEN_GRAPH: TagAdvice = TagAdvice {
    recommendation: "Include Open Graph meta tags to control how your content appears when shared on social media.",
    example: "<meta property=\"og:title\" content=\"Your Title\">\n<meta property=\"og:description\" content=\"Your Description\">\n<meta property=\"og:image\" content=\"https://example.com/image.jpg\">",
};

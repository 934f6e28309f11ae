use serde::Serialize;

/// A curated external reading link.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub url: &'static str,
    pub read_time: &'static str,
}

pub const ARTICLES: &[Article] = &[
    Article {
        id: 1,
        title: "How Smoking Affects Male Fertility and Sperm Quality",
        description: "Learn about the significant impact of smoking on male fertility, sperm count, and reproductive health. Discover how quitting can improve your chances of conception.",
        category: "Fertility",
        url: "https://www.healthline.com/health/smoking/effects-on-body",
        read_time: "5 min read",
    },
    Article {
        id: 2,
        title: "The Benefits of Quitting Smoking for Your Heart",
        description: "Understand how smoking damages your cardiovascular system and the amazing recovery that happens when you quit. Your heart starts healing within hours.",
        category: "Heart Health",
        url: "https://www.cdc.gov/tobacco/quit_smoking/how_to_quit/benefits/index.htm",
        read_time: "4 min read",
    },
    Article {
        id: 3,
        title: "Vaping vs Smoking: Understanding the Risks",
        description: "Compare the health risks of vaping versus traditional cigarettes. Learn why reducing or eliminating both is important for your health.",
        category: "General Health",
        url: "https://www.lung.org/quit-smoking/e-cigarettes-vaping/what-do-we-know",
        read_time: "6 min read",
    },
    Article {
        id: 4,
        title: "Protecting Your Lungs: The Road to Recovery",
        description: "Discover how your lungs heal after quitting smoking and what you can do to speed up the recovery process. Hope and healing are possible.",
        category: "Lung Health",
        url: "https://www.lung.org/quit-smoking/smoking-facts/health-effects/smoking",
        read_time: "7 min read",
    },
    Article {
        id: 5,
        title: "Mental Health and Smoking: Breaking the Cycle",
        description: "Explore the connection between smoking and mental health, and learn healthy coping strategies for stress and anxiety without cigarettes.",
        category: "Mental Health",
        url: "https://www.nami.org/About-Mental-Illness/Common-with-Mental-Illness/Tobacco-Use-and-Mental-Health",
        read_time: "5 min read",
    },
    Article {
        id: 6,
        title: "Timeline of Health Benefits After Quitting",
        description: "See the incredible timeline of health improvements that happen when you quit smoking, from 20 minutes to 20 years after your last cigarette.",
        category: "Recovery",
        url: "https://www.healthline.com/health/what-happens-when-you-quit-smoking",
        read_time: "4 min read",
    },
];

//! Copy and media shown on the page. Fixed at build time.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Point {
    pub title: &'static str,
    pub text: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Service {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub background: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub category: &'static str,
    pub image: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
}

pub const BRAND: &str = "Elegant";
pub const CONTACT_ANCHOR: &str = "#contact";
pub const CONTACT_LABEL: &str = "Démarrer un projet";
pub const CONTACT_EMAIL: &str = "hello@elegant.cd";

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "Expertise", href: "#services" },
    NavLink { label: "Réalisations", href: "#portfolio" },
    NavLink { label: "Témoignages", href: "#testimonials" },
    NavLink { label: "FAQ", href: "#faq" },
];

pub const FOOTER_LINKS: &[NavLink] = &[
    NavLink { label: "Accueil", href: "#" },
    NavLink { label: "Services", href: "#services" },
    NavLink { label: "Portfolio", href: "#portfolio" },
    NavLink { label: "Contact", href: "#contact" },
];

pub const SOCIAL_LINKS: &[NavLink] = &[
    NavLink { label: "Instagram", href: "#" },
    NavLink { label: "LinkedIn", href: "#" },
    NavLink { label: "Twitter", href: "#" },
];

pub const HERO_IMAGE: &str = "https://images.unsplash.com/photo-1481487484168-9b995ecc168d?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80";

pub const PROBLEMS: &[Point] = &[
    Point {
        title: "Confusion :",
        text: "Trop d'informations tuent l'information. Le visiteur part.",
    },
    Point {
        title: "Lenteur :",
        text: "Chaque seconde de chargement réduit vos ventes de 7%.",
    },
    Point {
        title: "Invisibilité :",
        text: "Un site magnifique que personne ne trouve sur Google est inutile.",
    },
];

pub const SOLUTIONS: &[Point] = &[
    Point {
        title: "Design Intentionnel",
        text: "Chaque pixel a une fonction. Nous guidons l'œil de l'utilisateur vers l'action.",
    },
    Point {
        title: "Performance Extrême",
        text: "Optimisation technique de pointe pour des chargements instantanés, même en 3G.",
    },
    Point {
        title: "Storytelling Captivant",
        text: "Nous racontons votre histoire d'une manière qui résonne avec votre audience cible.",
    },
];

pub const SERVICES: &[Service] = &[
    Service {
        icon: "🎨",
        title: "Design UI/UX Premium",
        description: "Nous créons des interfaces qui inspirent confiance immédiate. Une esthétique raffinée qui positionne votre marque au-dessus de la concurrence.",
        background: "#FAFAFA",
    },
    Service {
        icon: "</>",
        title: "Développement Sur-Mesure",
        description: "Pas de templates génériques. Nous codons des solutions robustes, sécurisées et évolutives adaptées spécifiquement à vos besoins d'affaires.",
        background: "#F8F8FF",
    },
    Service {
        icon: "📱",
        title: "Optimisation Mobile",
        description: "En RDC, le mobile est roi. Votre site sera parfaitement fluide et intuitif sur tous les smartphones, garantissant une expérience utilisateur sans faille.",
        background: "#FFFFF0",
    },
    Service {
        icon: "📈",
        title: "SEO & Performance",
        description: "Être visible est crucial. Nous optimisons chaque ligne de code pour que Google adore votre site autant que vos clients.",
        background: "#F0FFFF",
    },
];

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Architecture Moderne",
        category: "Site Vitrine",
        image: "https://picsum.photos/800/600?grayscale&random=1",
    },
    Project {
        title: "Kinshasa Finance",
        category: "Plateforme Corporate",
        image: "https://picsum.photos/800/600?grayscale&random=2",
    },
    Project {
        title: "Restaurant Le Palmier",
        category: "Hospitality",
        image: "https://picsum.photos/800/600?grayscale&random=3",
    },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "Elegant a complètement transformé notre image en ligne. Nous sommes passés d'un site amateur à une référence dans notre secteur à Kinshasa.",
        author: "Jean-Paul M.",
        role: "CEO, Mining Solutions RDC",
    },
    Testimonial {
        quote: "La vitesse d'exécution et la qualité du design sont incomparables. C'est le meilleur investissement marketing que nous ayons fait cette année.",
        author: "Sarah K.",
        role: "Directrice Marketing, KivuTech",
    },
    Testimonial {
        quote: "Une équipe professionnelle qui comprend les enjeux du marché local tout en apportant des standards internationaux. Bravo.",
        author: "Michel B.",
        role: "Fondateur, ImmoCongo",
    },
];

pub const FAQS: &[FaqEntry] = &[
    FaqEntry {
        question: "Combien coûte un site web avec Elegant ?",
        answer: "Chaque projet est unique. Nous ne proposons pas de forfaits génériques, mais des solutions sur-mesure. Cependant, nos projets commencent généralement à partir de $150 pour un site vitrine simple.",
    },
    FaqEntry {
        question: "Combien de temps prend la création ?",
        answer: "Pour un site vitrine standard, comptez entre 2 à 4 semaines. Pour des plateformes plus complexes, cela peut aller de 6 à 12 semaines. Nous privilégions la qualité à la précipitation. À savoir aussi que nous faisons nos sites en fonction de la demande de notre clientèle.",
    },
    FaqEntry {
        question: "Assurez-vous la maintenance après la mise en ligne ?",
        answer: "Absolument. Nous proposons des contrats de maintenance mensuels pour assurer que votre site reste sécurisé, rapide et à jour.",
    },
    FaqEntry {
        question: "Je suis basé à Lubumbashi/Goma, pouvez-vous travailler avec moi ?",
        answer: "Oui. Bien que basés principalement à Kinshasa, nous travaillons avec des clients dans toute la RDC et à l'international via visioconférence, bien évidemment sur nos différentes plateformes telles que Microsoft Teams, Discord et Zoom.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    // Ids set on the section elements in crate::sections.
    const SECTION_IDS: &[&str] = &["services", "portfolio", "testimonials", "faq", "contact"];

    #[test]
    fn every_anchor_points_at_a_section() {
        for link in NAV_LINKS.iter().chain(FOOTER_LINKS) {
            if link.href == "#" {
                continue;
            }
            let id = link.href.trim_start_matches('#');
            assert!(SECTION_IDS.contains(&id), "dangling anchor {}", link.href);
        }
        assert!(SECTION_IDS.contains(&CONTACT_ANCHOR.trim_start_matches('#')));
    }

    #[test]
    fn faq_entries_are_filled_in() {
        assert!(!FAQS.is_empty());
        for entry in FAQS {
            assert!(entry.question.ends_with('?'), "{}", entry.question);
            assert!(!entry.answer.trim().is_empty());
        }
    }

    #[test]
    fn display_lists_are_non_empty() {
        assert!(!SERVICES.is_empty());
        assert!(!PROJECTS.is_empty());
        assert!(!TESTIMONIALS.is_empty());
        assert_eq!(PROBLEMS.len(), SOLUTIONS.len());
    }
}

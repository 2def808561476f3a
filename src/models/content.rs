//! Static marketing copy for the landing page.

use super::icon::IconKind;

/// Sections that can be reached with a same-page link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionId {
    Home,
    About,
    Services,
    Features,
    Contact,
}

impl SectionId {
    /// The element id. `home` is the page root, reached with a bare `#`.
    pub fn fragment(&self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Services => "services",
            SectionId::Features => "features",
            SectionId::Contact => "contact",
        }
    }

    pub fn href(&self) -> &'static str {
        match self {
            SectionId::Home => "#",
            SectionId::About => "#about",
            SectionId::Services => "#services",
            SectionId::Features => "#features",
            SectionId::Contact => "#contact",
        }
    }

    pub fn all() -> Vec<SectionId> {
        vec![
            SectionId::Home,
            SectionId::About,
            SectionId::Services,
            SectionId::Features,
            SectionId::Contact,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub section: SectionId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Photo {
    pub src: &'static str,
    pub alt: &'static str,
}

/// Icon, heading and a sentence: used by about, services and features.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight {
    pub icon: IconKind,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub avatar: &'static str,
    pub quote: &'static str,
    pub rating: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactDetail {
    pub icon: IconKind,
    pub title: &'static str,
    pub value: &'static str,
}

/// A social profile. `href` is `None` until the profile exists, and the link
/// renders without a target so clicking it does nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub icon: IconKind,
    pub label: &'static str,
    pub href: Option<&'static str>,
}

pub const BRAND: &str = "Waggy";
pub const ACCENT: &str = "#F4844C";

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "Home", section: SectionId::Home },
    NavLink { label: "About", section: SectionId::About },
    NavLink { label: "Services", section: SectionId::Services },
    NavLink { label: "Features", section: SectionId::Features },
    NavLink { label: "Contact", section: SectionId::Contact },
];

pub const FOOTER_QUICK_LINKS: &[NavLink] = &[
    NavLink { label: "Home", section: SectionId::Home },
    NavLink { label: "About Us", section: SectionId::About },
    NavLink { label: "Services", section: SectionId::Services },
    NavLink { label: "Features", section: SectionId::Features },
    NavLink { label: "Contact Us", section: SectionId::Contact },
];

pub const HERO_IMAGE: Photo = Photo {
    src: "https://images.pexels.com/photos/1404819/pexels-photo-1404819.jpeg",
    alt: "Happy dogs",
};

pub const HERO_AVATARS: &[&str] = &[
    "https://images.pexels.com/photos/415829/pexels-photo-415829.jpeg",
    "https://images.pexels.com/photos/2726111/pexels-photo-2726111.jpeg",
    "https://images.pexels.com/photos/1222271/pexels-photo-1222271.jpeg",
];

pub const DIFFERENTIATORS: &[Highlight] = &[
    Highlight {
        icon: IconKind::Package,
        title: "Inclusive Platform",
        description: "We cater to all types of pets - from dogs and cats to cows and goats.",
    },
    Highlight {
        icon: IconKind::Truck,
        title: "Rapid Delivery",
        description: "Emergency pet supplies delivered in just 17 minutes through our Dunzo B2B partnership.",
    },
    Highlight {
        icon: IconKind::Users,
        title: "Doorstep Services",
        description: "From veterinary check-ups to grooming, we bring professional services to your home.",
    },
];

pub const ABOUT_PHOTOS: &[Photo] = &[
    Photo {
        src: "https://images.pexels.com/photos/2023384/pexels-photo-2023384.jpeg",
        alt: "Happy puppy",
    },
    Photo {
        src: "https://images.pexels.com/photos/1741205/pexels-photo-1741205.jpeg",
        alt: "Cute puppy",
    },
    Photo {
        src: "https://images.pexels.com/photos/1741235/pexels-photo-1741235.jpeg",
        alt: "Dog getting groomed",
    },
    Photo {
        src: "https://images.pexels.com/photos/406014/pexels-photo-406014.jpeg",
        alt: "Cat being petted",
    },
];

pub const SERVICES: &[Highlight] = &[
    Highlight {
        icon: IconKind::Package,
        title: "Product Delivery",
        description: "Get pet food, toys, medicines, and supplies delivered to your doorstep within minutes.",
    },
    Highlight {
        icon: IconKind::Stethoscope,
        title: "Veterinary Services",
        description: "Book on-site veterinary consultations, health check-ups, vaccinations, and medical procedures.",
    },
    Highlight {
        icon: IconKind::Scissors,
        title: "Grooming Services",
        description: "Professional grooming including baths, haircuts, nail trimming, and spa treatments at home.",
    },
];

pub const FEATURES: &[Highlight] = &[
    Highlight {
        icon: IconKind::Timer,
        title: "Rapid Delivery",
        description: "Essential pet supplies delivered in just 17 minutes through our Dunzo B2B partnership.",
    },
    Highlight {
        icon: IconKind::Users,
        title: "Comprehensive Care",
        description: "From food and toys to specialized medical services, we provide everything your pet needs.",
    },
    Highlight {
        icon: IconKind::Package,
        title: "Affordable Pricing",
        description: "We partner with local businesses to ensure competitive pricing.",
    },
    Highlight {
        icon: IconKind::BadgeCheck,
        title: "Government Registered",
        description: "We operate with all necessary certifications and registrations.",
    },
];

pub const PLATFORM_HIGHLIGHTS: &[&str] = &[
    "Real-time order tracking",
    "AI-driven recommendations",
    "Home-based veterinary care",
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Priya Singh",
        role: "Dog Parent",
        avatar: "https://images.pexels.com/photos/415829/pexels-photo-415829.jpeg",
        quote: "The 17-minute delivery saved my puppy when he needed urgent medication. \
                The vet consultation was professional and thorough. Waggy has made pet care so convenient!",
        rating: 5,
    },
    Testimonial {
        name: "Rahul Mehta",
        role: "Cat Parent",
        avatar: "https://images.pexels.com/photos/2726111/pexels-photo-2726111.jpeg",
        quote: "The grooming service was exceptional. The groomer was patient with my anxious cat \
                and did a wonderful job. The prices are much better than what I was paying before!",
        rating: 5,
    },
    Testimonial {
        name: "Anita Sharma",
        role: "Farm Owner",
        avatar: "https://images.pexels.com/photos/1222271/pexels-photo-1222271.jpeg",
        quote: "Finally, a service that understands farm animals too! The veterinary care for my goats \
                was excellent, and the regular feed delivery has made my life so much easier.",
        rating: 5,
    },
];

pub const CONTACT_DETAILS: &[ContactDetail] = &[
    ContactDetail {
        icon: IconKind::MapPin,
        title: "Office Location",
        value: "Chennai, Tamil Nadu, India",
    },
    ContactDetail {
        icon: IconKind::Mail,
        title: "Email Us",
        value: "support@waggy.in",
    },
    ContactDetail {
        icon: IconKind::Phone,
        title: "Call Us",
        value: "+91-9876543210",
    },
];

pub const CONTACT_SUBJECTS: &[&str] = &["General Inquiry", "Partnership", "Support", "Other"];

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { icon: IconKind::Facebook, label: "Facebook", href: None },
    SocialLink { icon: IconKind::Twitter, label: "Twitter", href: None },
    SocialLink { icon: IconKind::Instagram, label: "Instagram", href: None },
    SocialLink { icon: IconKind::Linkedin, label: "LinkedIn", href: None },
];

/// Footer entries without a destination yet. Rendered as links with no href.
pub const FOOTER_SERVICES: &[&str] = &[
    "Product Delivery",
    "Veterinary Services",
    "Grooming Services",
    "Pet Walking & Sitting",
    "Farm Animal Care",
];

pub const LEGAL_LINKS: &[&str] = &["Privacy Policy", "Terms of Service", "Cookie Policy"];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::Fragment;

    #[test]
    fn nav_links_are_same_page_fragments() {
        for link in NAV_LINKS.iter().chain(FOOTER_QUICK_LINKS) {
            let fragment = Fragment::parse(link.section.href());
            match link.section {
                SectionId::Home => assert_eq!(fragment, Some(Fragment::Top)),
                section => assert_eq!(fragment, Some(Fragment::Element(section.fragment()))),
            }
        }
    }

    #[test]
    fn only_home_links_resolve_to_top() {
        let hrefs = NAV_LINKS
            .iter()
            .chain(FOOTER_QUICK_LINKS)
            .map(|l| (Some(l.section), Some(l.section.href())))
            .chain(SOCIAL_LINKS.iter().map(|s| (None, s.href)));
        for (section, href) in hrefs {
            let Some(href) = href else { continue };
            if Fragment::parse(href) == Some(Fragment::Top) {
                assert_eq!(section, Some(SectionId::Home), "{href}");
            }
        }
    }

    #[test]
    fn placeholder_links_have_no_target() {
        assert!(SOCIAL_LINKS.iter().all(|s| s.href.is_none()));
    }

    #[test]
    fn every_section_is_linked_from_nav() {
        for section in SectionId::all() {
            assert!(NAV_LINKS.iter().any(|l| l.section == section), "{section:?}");
        }
    }

    #[test]
    fn grids_have_expected_sizes() {
        assert_eq!(ABOUT_PHOTOS.len(), 4);
        assert_eq!(SERVICES.len(), 3);
        assert_eq!(FEATURES.len(), 4);
        assert_eq!(TESTIMONIALS.len(), 3);
        assert!(TESTIMONIALS.iter().all(|t| t.rating == 5));
    }

    #[test]
    fn images_are_remote() {
        let photos = ABOUT_PHOTOS.iter().map(|p| p.src).chain([HERO_IMAGE.src]);
        for src in photos.chain(HERO_AVATARS.iter().copied()) {
            assert!(src.starts_with("https://"), "{src}");
        }
    }
}

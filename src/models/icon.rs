/// Line icons used on the page, drawn on a 24x24 grid with round caps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    Dog,
    Truck,
    Stethoscope,
    Scissors,
    Users,
    Package,
    BadgeCheck,
    Timer,
    MapPin,
    Mail,
    Phone,
    Facebook,
    Twitter,
    Instagram,
    Linkedin,
}

impl IconKind {
    pub fn name(&self) -> &'static str {
        match self {
            IconKind::Dog => "dog",
            IconKind::Truck => "truck",
            IconKind::Stethoscope => "stethoscope",
            IconKind::Scissors => "scissors",
            IconKind::Users => "users",
            IconKind::Package => "package",
            IconKind::BadgeCheck => "badge-check",
            IconKind::Timer => "timer",
            IconKind::MapPin => "map-pin",
            IconKind::Mail => "mail",
            IconKind::Phone => "phone",
            IconKind::Facebook => "facebook",
            IconKind::Twitter => "twitter",
            IconKind::Instagram => "instagram",
            IconKind::Linkedin => "linkedin",
        }
    }

    /// SVG path data. Circles are written as two arcs so every shape is a `<path>`.
    pub fn paths(&self) -> &'static [&'static str] {
        match self {
            IconKind::Dog => &[
                "M10 5.172C10 3.782 8.423 2.679 6.5 3c-2.823.47-4.113 6.006-4 7 .08.703 1.725 1.722 3.656 1 1.261-.472 1.96-1.45 2.344-2.5",
                "M14.267 5.172c0-1.39 1.577-2.493 3.5-2.172 2.823.47 4.113 6.006 4 7-.08.703-1.725 1.722-3.656 1-1.261-.472-1.855-1.45-2.239-2.5",
                "M8 14v.5",
                "M16 14v.5",
                "M11.25 16.25h1.5L12 17l-.75-.75Z",
                "M4.42 11.247A13.152 13.152 0 0 0 4 14.556C4 18.728 7.582 21 12 21s8-2.272 8-6.444c0-1.061-.162-2.2-.493-3.309m-9.243-6.082A8.801 8.801 0 0 1 12 5c.78 0 1.5.108 2.161.306",
            ],
            IconKind::Truck => &[
                "M14 18V6a2 2 0 0 0-2-2H4a2 2 0 0 0-2 2v11a1 1 0 0 0 1 1h2",
                "M15 18H9",
                "M19 18h2a1 1 0 0 0 1-1v-3.65a1 1 0 0 0-.22-.624l-3.48-4.35A1 1 0 0 0 17.52 8H14",
                "M5 18a2 2 0 1 0 4 0a2 2 0 1 0-4 0",
                "M15 18a2 2 0 1 0 4 0a2 2 0 1 0-4 0",
            ],
            IconKind::Stethoscope => &[
                "M4.8 2.3A.3.3 0 1 0 5 2H4a2 2 0 0 0-2 2v5a6 6 0 0 0 6 6a6 6 0 0 0 6-6V4a2 2 0 0 0-2-2h-1a.2.2 0 1 0 .3.3",
                "M8 15v1a6 6 0 0 0 6 6a6 6 0 0 0 6-6v-4",
                "M18 10a2 2 0 1 0 4 0a2 2 0 1 0-4 0",
            ],
            IconKind::Scissors => &[
                "M3 6a3 3 0 1 0 6 0a3 3 0 1 0-6 0",
                "M3 18a3 3 0 1 0 6 0a3 3 0 1 0-6 0",
                "M20 4 8.12 15.88",
                "M14.47 14.48 20 20",
                "M8.12 8.12 12 12",
            ],
            IconKind::Users => &[
                "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2",
                "M5 7a4 4 0 1 0 8 0a4 4 0 1 0-8 0",
                "M22 21v-2a4 4 0 0 0-3-3.87",
                "M16 3.13a4 4 0 0 1 0 7.75",
            ],
            IconKind::Package => &[
                "m7.5 4.27 9 5.15",
                "M21 8a2 2 0 0 0-1-1.73l-7-4a2 2 0 0 0-2 0l-7 4A2 2 0 0 0 3 8v8a2 2 0 0 0 1 1.73l7 4a2 2 0 0 0 2 0l7-4A2 2 0 0 0 21 16Z",
                "m3.3 7 8.7 5 8.7-5",
                "M12 22V12",
            ],
            IconKind::BadgeCheck => &[
                "M3.85 8.62a4 4 0 0 1 4.78-4.77 4 4 0 0 1 6.74 0 4 4 0 0 1 4.78 4.78 4 4 0 0 1 0 6.74 4 4 0 0 1-4.77 4.78 4 4 0 0 1-6.75 0 4 4 0 0 1-4.78-4.77 4 4 0 0 1 0-6.76Z",
                "m9 12 2 2 4-4",
            ],
            IconKind::Timer => &[
                "M10 2h4",
                "M12 14l3-3",
                "M4 14a8 8 0 1 0 16 0a8 8 0 1 0-16 0",
            ],
            IconKind::MapPin => &[
                "M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z",
                "M9 10a3 3 0 1 0 6 0a3 3 0 1 0-6 0",
            ],
            IconKind::Mail => &[
                "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
                "m22 6-10 7L2 6",
            ],
            IconKind::Phone => &[
                "M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z",
            ],
            IconKind::Facebook => &[
                "M18 2h-3a5 5 0 0 0-5 5v3H7v4h3v8h4v-8h3l1-4h-4V7a1 1 0 0 1 1-1h3z",
            ],
            IconKind::Twitter => &[
                "M22 4s-.7 2.1-2 3.4c1.6 10-9.4 17.3-18 11.6 2.2.1 4.4-.6 6-2C3 15.5.5 9.6 3 5c2.2 2.6 5.6 4.1 9 4-.9-4.2 4-6.6 7-3.8 1.1 0 3-1.2 3-1.2z",
            ],
            IconKind::Instagram => &[
                "M7 2h10a5 5 0 0 1 5 5v10a5 5 0 0 1-5 5H7a5 5 0 0 1-5-5V7a5 5 0 0 1 5-5z",
                "M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z",
                "M17.5 6.5h.01",
            ],
            IconKind::Linkedin => &[
                "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z",
                "M2 9h4v12H2z",
                "M2 4a2 2 0 1 0 4 0a2 2 0 1 0-4 0",
            ],
        }
    }
}

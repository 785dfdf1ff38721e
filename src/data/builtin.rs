//! Compiled-in portfolio entries

use crate::core::{Category, TimelineEntry, TimelineLink};

fn link(label: &str, url: &str) -> TimelineLink {
    TimelineLink {
        label: label.to_string(),
        url: url.to_string(),
        rel: None,
    }
}

fn tags(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

pub(crate) fn builtin_entries() -> Vec<TimelineEntry> {
    vec![
        TimelineEntry {
            id: "2025-workout-app".into(),
            category: Category::Project,
            title: "Workout & Training Management App".into(),
            organization: Some("Side Project".into()),
            description: Some(
                "A personal project to develop a workout and training management application \
                 using Angular 19 for the frontend and PHP for the backend. The app allows users \
                 to create, track, and analyze their workout routines with a focus on usability \
                 and performance."
                    .into(),
            ),
            tech: tags(&[
                "Angular 19",
                "Javascript",
                "PHP",
                "MySQL",
                "RxJS",
                "Bootstrap",
                "Performance Optimization",
            ]),
            start: "2025-03".into(),
            end: Some("present".into()),
            highlight: true,
            links: vec![link(
                "Panel de entrenamientos : Github",
                "https://github.com/FromTheWell/panel-entrenamientos-angular-php",
            )],
            location: None,
        },
        TimelineEntry {
            id: "2025-misquad".into(),
            category: Category::Job,
            title: "FullStack Developer (Angular/JavaScript/PHP)".into(),
            organization: Some("TOOOLS S.L.".into()),
            description: Some(
                "Front-End development for Tribuna Digital, enhancing code performance, \
                 readability, and user experience (based Angular 19 updated form 18). Full-Stack \
                 development for iSquad / MiSquad, sports management systems for national \
                 federations (Tennis, Table Tennis, Handball, etc.), using PHP and vanilla \
                 Javascript. Implementation of dynamic and responsive views for training and \
                 exercise management tools"
                    .into(),
            ),
            tech: tags(&[
                "Angular 19",
                "Javascript",
                "PHP",
                "MySQL",
                "RxJS",
                "Bootstrap",
                "Performance Optimization",
            ]),
            start: "2025-03".into(),
            end: Some("2025-10".into()),
            highlight: true,
            links: vec![
                link("Tribuna", "https://www.tribunavalladolid.com/"),
                link("iSquad", "https://hub.isquad.es/"),
            ],
            location: None,
        },
        TimelineEntry {
            id: "2024-jccm".into(),
            category: Category::Job,
            title: "Frontend Consultant (Angular)".into(),
            organization: Some("MINSAIT".into()),
            description: Some(
                "Lead Front-End developer for the Castilla-La Mancha regional government (JCCM), \
                 developing and maintaining platforms such as SIACI, Tablón, Notifica, \
                 Portafirmas, etc. Migration of legacy systems to modern Angular architecture \
                 using lazy loading, Storybook, and reusable components. Improved accessibility, \
                 maintainability, and visual consistency through testing and documentation."
                    .into(),
            ),
            tech: tags(&["Angular 12", "Nx", "Jenkins", "Storybook", "Cypress", "Accessibility"]),
            start: "2021-11".into(),
            end: Some("2025-02".into()),
            highlight: false,
            links: vec![link("Sede Electrónica", "https://www.jccm.es/")],
            location: None,
        },
        TimelineEntry {
            id: "2019-future".into(),
            category: Category::Job,
            title: "Frontend Engineer (Angular)".into(),
            organization: Some("Future Space".into()),
            description: Some(
                "• Contributed to SmartGraph, a graph-based data analytics platform for detecting \
                 insurance fraud. • Developed microservices with Spring Boot (Java) and Front-End \
                 with Angular focused on complex data visualization. • Enhanced system \
                 performance, scalability, and accessibility."
                    .into(),
            ),
            tech: tags(&["Angular", "Nx", "Jenkins", "Storybook"]),
            start: "2019-09".into(),
            end: Some("2021-11".into()),
            highlight: false,
            links: vec![link(
                "SmartGraph - Plataforma de análisis de datos",
                "https://www.futurespace.es/plataforma-de-investigacion/",
            )],
            location: None,
        },
        TimelineEntry {
            id: "2014-degree".into(),
            category: Category::Education,
            title: "Grado en Tecnologías de la Telecomunicación".into(),
            organization: Some("Universidad de Castilla-La Mancha".into()),
            description: None,
            tech: Vec::new(),
            start: "2014-09".into(),
            end: Some("2019-07".into()),
            highlight: false,
            links: Vec::new(),
            location: None,
        },
    ]
}

use super::model::{Institution, Profile, ProfileId};

/// Researchers listed when the directory starts with no prior state.
pub fn seed_profiles() -> Vec<Profile> {
    vec![
        Profile {
            id: ProfileId::new("1"),
            name: "Dr. Alejandro García".to_string(),
            institution: Institution::Udg,
            research_line: "Simulaciones Inmersivas".to_string(),
            biography: "Profesor titular en la Preparatoria 7 de la UDG. Especialista en el \
                        desarrollo de entornos virtuales para la enseñanza de la mecánica \
                        clásica. Ha publicado diversos artículos sobre el impacto cognitivo de \
                        la realidad virtual en estudiantes de bachillerato."
                .to_string(),
            photo_url: "https://picsum.photos/id/1025/400/400".to_string(),
        },
        Profile {
            id: ProfileId::new("2"),
            name: "Dr. Sarah Smith".to_string(),
            institution: Institution::Ksu,
            research_line: "Física Computacional".to_string(),
            biography: "Investigadora principal en el Departamento de Física de Kent State \
                        University. Colabora internacionalmente en proyectos de educación STEM. \
                        Su enfoque actual es la visualización de datos complejos mediante \
                        herramientas de realidad aumentada."
                .to_string(),
            photo_url: "https://picsum.photos/id/1011/400/400".to_string(),
        },
        Profile {
            id: ProfileId::new("3"),
            name: "Mtra. Elena Torres".to_string(),
            institution: Institution::Udg,
            research_line: "Pedagogía Digital".to_string(),
            biography: "Experta en diseño instruccional para plataformas e-learning. Trabaja en \
                        la integración curricular de herramientas inmersivas en el programa de \
                        física de la Universidad de Guadalajara."
                .to_string(),
            photo_url: "https://picsum.photos/id/338/400/400".to_string(),
        },
    ]
}

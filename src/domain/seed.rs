use crate::entities::project::Project;

/// The canonical demo dataset. Both the mock server's repository and the
/// client's fallback path read from here, so a caller sees the same four
/// projects whether the backend answered or not.
pub fn seed_projects() -> Vec<Project> {
    vec![
        Project {
            id: "1".into(),
            project_name: "AI Aris888 Platform".into(),
            short_description: "Yapay zeka destekli bilgi alma ve sohbet platformu.".into(),
            detailed_description: Some(
                "AI Aris888, üretken yapay zeka ve RAG (Retrieval-Augmented Generation) \
                 tekniklerini birleştiren modern bir yapay zeka platformudur. Projenin \
                 geliştirilme sürecinde backend API tasarımı, Python tabanlı RAG pipeline \
                 entegrasyonu, belge indeksleme, vektör veritabanı yapılandırması ve React \
                 arayüz bileşenlerinin geliştirilmesinde aktif rol aldım. Sistem; gerçek \
                 zamanlı bilgi alma, kullanıcı etkileşimi, yüksek performanslı sorgu işleme \
                 ve ölçeklenebilir mimari özellikleriyle öne çıkar."
                    .into(),
            ),
            technologies_used: Some(
                "Node.js, Python, React, RAG, Vector Databases, Tailwind CSS".into(),
            ),
            main_image: Some("/images/chat.png".into()),
            project_url: Some("https://ai.aris888.io/".into()),
            github_url: None,
            completion_date: Some("05.12.2025".into()),
            is_featured: Some(true),
        },
        Project {
            id: "2".into(),
            project_name: "Social Media App".into(),
            short_description: "Gerçek zamanlı sosyal medya platformu.".into(),
            detailed_description: Some(
                "Kullanıcıların fotoğraf paylaşabildiği, yorum yapabildiği ve birbirini \
                 takip edebildiği tam kapsamlı bir sosyal medya uygulaması. Socket.io ile \
                 anlık mesajlaşma özelliği entegre edilmiştir."
                    .into(),
            ),
            technologies_used: Some("Next.js, Prisma, PostgreSQL, Socket.io".into()),
            main_image: Some("https://picsum.photos/id/20/1200/800".into()),
            project_url: Some("https://example.com".into()),
            github_url: Some("https://github.com".into()),
            completion_date: Some("2023-10-20".into()),
            is_featured: Some(true),
        },
        Project {
            id: "3".into(),
            project_name: "Task Management System".into(),
            short_description: "Kurumsal görev ve proje takip sistemi.".into(),
            detailed_description: Some(
                "Takımların projelerini yönetebileceği, görev atayabileceği ve ilerlemeyi \
                 takip edebileceği bir SaaS uygulaması. Kanban board görünümü ve takvim \
                 entegrasyonu mevcuttur."
                    .into(),
            ),
            technologies_used: Some("Vue.js, Firebase, Pinia".into()),
            main_image: Some("https://picsum.photos/id/48/1200/800".into()),
            project_url: Some("https://example.com".into()),
            github_url: Some("https://github.com".into()),
            completion_date: Some("2024-01-10".into()),
            is_featured: Some(true),
        },
        Project {
            id: "4".into(),
            project_name: "AI Content Generator".into(),
            short_description: "Yapay zeka destekli içerik üreticisi.".into(),
            detailed_description: Some(
                "OpenAI API kullanılarak geliştirilen, blog yazıları ve sosyal medya \
                 içerikleri üreten bir araç. Kullanıcı dostu arayüzü ile saniyeler içinde \
                 özgün içerikler oluşturur."
                    .into(),
            ),
            technologies_used: Some("React, OpenAI API, Express".into()),
            main_image: Some("https://picsum.photos/id/60/1200/800".into()),
            project_url: Some("https://example.com".into()),
            github_url: Some("https://github.com".into()),
            completion_date: Some("2024-02-01".into()),
            is_featured: Some(false),
        },
    ]
}

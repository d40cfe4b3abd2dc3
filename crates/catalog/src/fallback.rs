//! Bundled fallback dataset.
//!
//! Served whenever the backend is unconfigured or a catalog read fails, and
//! pushed to the live store by the "sync defaults" seeding actions. The
//! records are kept in the legacy static shape and mapped to the canonical
//! entities on access, through the same mappers the wire path uses.

use bloomgift_core::{
    Category, CityMapping, CtaContent, FeaturesContent, FooterContent, HeroContent, HomeContent,
    Island, MenuItem, Product, Testimonial, WhatsAppConfig,
};

use crate::supabase::records::{
    StaticProduct, StaticTestimonial, product_from_static, testimonial_from_static,
};

/// The number every coverage entry and the floating contact button use by
/// default.
pub const DEFAULT_WHATSAPP_NUMBER: &str = "6285646420488";

/// The bundled product catalog, mapped to the canonical shape.
#[must_use]
pub fn products() -> Vec<Product> {
    PRODUCTS.iter().map(product_from_static).collect()
}

/// The bundled testimonial seed list; every entry is approved.
#[must_use]
pub fn testimonials() -> Vec<Testimonial> {
    TESTIMONIALS.iter().map(testimonial_from_static).collect()
}

/// Default site navigation.
#[must_use]
pub fn default_navigation() -> Vec<MenuItem> {
    let entries = [
        ("1", "Beranda", "/"),
        ("2", "Tentang Kami", "/tentang-kami"),
        ("3", "Katalog", "/katalog"),
        ("4", "Testimoni", "/testimoni"),
        ("5", "Kontak", "/kontak"),
    ];
    entries
        .into_iter()
        .zip(1..)
        .map(|((id, name, href), order)| MenuItem {
            id: id.to_owned(),
            name: name.to_owned(),
            href: href.to_owned(),
            order,
            visible: true,
        })
        .collect()
}

/// Default footer block.
#[must_use]
pub fn default_footer() -> FooterContent {
    FooterContent {
        description: "Toko bunga dan hadiah premium untuk setiap momen spesial Anda. \
                      Melayani pengiriman ke seluruh Indonesia."
            .to_owned(),
        phone: format!("+{DEFAULT_WHATSAPP_NUMBER}"),
        email: "halo@bloomgift.com".to_owned(),
        address: "Jl. Kemang Raya No. 12, Jakarta Selatan".to_owned(),
        instagram_url: "https://instagram.com/bloomgift.id".to_owned(),
        facebook_url: "https://facebook.com/bloomgift.id".to_owned(),
    }
}

/// Default WhatsApp contact configuration.
#[must_use]
pub fn default_whatsapp() -> WhatsAppConfig {
    WhatsAppConfig {
        default_number: DEFAULT_WHATSAPP_NUMBER.to_owned(),
        consultation_message: "Halo, saya ingin berkonsultasi mengenai produk yang cocok \
                               untuk kebutuhan saya."
            .to_owned(),
        order_message: "Halo, saya tertarik dengan produk berikut:".to_owned(),
    }
}

/// Default home page content.
#[must_use]
pub fn default_home_content() -> HomeContent {
    HomeContent {
        hero: HeroContent {
            subtitle: "Premium Gift & Flower Shop".to_owned(),
            title: "Hadirkan Kebahagiaan di".to_owned(),
            title_highlight: "Setiap Momen".to_owned(),
            description: "Buket bunga segar, hampers eksklusif, dan kue premium untuk \
                          orang-orang tersayang. Dikirim dengan cinta ke seluruh Indonesia."
                .to_owned(),
            cta_primary: "Lihat Katalog".to_owned(),
            cta_secondary: "Konsultasi Gratis".to_owned(),
            stats_customers: "1000+".to_owned(),
            stats_orders: "5000+".to_owned(),
            stats_rating: "4.9".to_owned(),
        },
        features: FeaturesContent {
            section_subtitle: "Mengapa Kami".to_owned(),
            section_title: "Alasan Memilih BloomGift".to_owned(),
            section_description: "Kami berkomitmen menghadirkan produk terbaik dengan \
                                  pelayanan yang memuaskan."
                .to_owned(),
            feature1_title: "Kualitas Premium".to_owned(),
            feature1_desc: "Hanya bunga segar dan produk berkualitas tinggi yang kami \
                            pilih untuk Anda."
                .to_owned(),
            feature2_title: "Pengiriman Tepat Waktu".to_owned(),
            feature2_desc: "Pesanan tiba sesuai jadwal, bahkan untuk pengiriman di hari \
                            yang sama."
                .to_owned(),
            feature3_title: "Desain Custom".to_owned(),
            feature3_desc: "Setiap rangkaian dapat disesuaikan dengan tema dan budget Anda."
                .to_owned(),
            feature4_title: "Layanan Ramah".to_owned(),
            feature4_desc: "Tim kami siap membantu konsultasi pemilihan hadiah kapan saja."
                .to_owned(),
        },
        cta: CtaContent {
            title: "Butuh Bantuan Memilih".to_owned(),
            title_highlight: "Hadiah Sempurna?".to_owned(),
            description: "Konsultasikan kebutuhan Anda dengan tim kami melalui WhatsApp, \
                          gratis dan tanpa komitmen."
                .to_owned(),
            button_text: "Chat via WhatsApp".to_owned(),
        },
    }
}

/// Default delivery coverage table.
#[must_use]
pub fn default_cities() -> Vec<CityMapping> {
    let coverage: [(Island, &[&str]); 6] = [
        (
            Island::Jawa,
            &["Jakarta", "Bandung", "Surabaya", "Yogyakarta", "Semarang"],
        ),
        (Island::Sumatra, &["Medan", "Palembang", "Pekanbaru"]),
        (Island::Kalimantan, &["Balikpapan", "Pontianak"]),
        (Island::Sulawesi, &["Makassar", "Manado"]),
        (Island::Bali, &["Denpasar"]),
        (Island::PapuaMaluku, &["Jayapura", "Ambon"]),
    ];

    coverage
        .into_iter()
        .flat_map(|(island, cities)| {
            cities
                .iter()
                .map(move |city| CityMapping::new(island, city, DEFAULT_WHATSAPP_NUMBER))
        })
        .collect()
}

// =============================================================================
// Static records
// =============================================================================

static PRODUCTS: [StaticProduct; 10] = [
    StaticProduct {
        id: "1",
        slug: "buket-mawar-merah-premium",
        name: "Buket Mawar Merah Premium",
        price: 450_000,
        original_price: Some(550_000),
        category: Category::BuketBunga,
        description: "Buket mawar merah premium dengan 20 tangkai mawar segar pilihan \
                      terbaik. Dibungkus dengan kertas premium dan pita satin berkualitas \
                      tinggi. Cocok untuk hadiah ulang tahun, anniversary, atau momen \
                      spesial lainnya.",
        short_description: "20 tangkai mawar merah segar dengan kemasan premium",
        images: &["/assets/products/buket-mawar.jpg"],
        featured: true,
        best_seller: true,
        exclusive: false,
        product_url: "https://bloomgift.com/produk/buket-mawar-merah-premium",
    },
    StaticProduct {
        id: "2",
        slug: "hampers-lebaran-eksklusif",
        name: "Hampers Lebaran Eksklusif",
        price: 850_000,
        original_price: Some(1_000_000),
        category: Category::Hampers,
        description: "Hampers Lebaran eksklusif dengan berbagai pilihan kue kering premium, \
                      kurma pilihan, dan aneka cokelat import. Dikemas dalam box eksklusif \
                      dengan desain elegan.",
        short_description: "Paket hampers lebaran lengkap dengan kemasan mewah",
        images: &["/assets/products/hampers-lebaran.jpg"],
        featured: true,
        best_seller: false,
        exclusive: true,
        product_url: "https://bloomgift.com/produk/hampers-lebaran-eksklusif",
    },
    StaticProduct {
        id: "3",
        slug: "kue-ulang-tahun-custom",
        name: "Kue Ulang Tahun Custom",
        price: 350_000,
        original_price: None,
        category: Category::KueTart,
        description: "Kue ulang tahun custom dengan desain sesuai keinginan Anda. \
                      Menggunakan bahan-bahan premium dan dekorasi fondant berkualitas \
                      tinggi.",
        short_description: "Kue custom dengan desain bebas dan bahan premium",
        images: &["/assets/products/kue-ulang-tahun.jpg"],
        featured: false,
        best_seller: false,
        exclusive: false,
        product_url: "https://bloomgift.com/produk/kue-ulang-tahun-custom",
    },
    StaticProduct {
        id: "4",
        slug: "buket-bunga-matahari",
        name: "Buket Bunga Matahari",
        price: 380_000,
        original_price: None,
        category: Category::BuketBunga,
        description: "Buket bunga matahari segar yang membawa keceriaan dan kebahagiaan. \
                      Terdiri dari 10 tangkai bunga matahari dengan tambahan baby breath \
                      dan eucalyptus.",
        short_description: "10 tangkai bunga matahari dengan baby breath",
        images: &["/assets/products/buket-matahari.jpg"],
        featured: true,
        best_seller: false,
        exclusive: false,
        product_url: "https://bloomgift.com/produk/buket-bunga-matahari",
    },
    StaticProduct {
        id: "5",
        slug: "hampers-bayi-newborn",
        name: "Hampers Bayi Newborn",
        price: 650_000,
        original_price: None,
        category: Category::Hampers,
        description: "Hampers spesial untuk bayi baru lahir berisi perlengkapan bayi \
                      premium seperti baju, selimut, mainan, dan aksesoris lainnya.",
        short_description: "Perlengkapan bayi premium dalam kemasan cantik",
        images: &["/assets/products/hampers-bayi.jpg"],
        featured: false,
        best_seller: false,
        exclusive: false,
        product_url: "https://bloomgift.com/produk/hampers-bayi-newborn",
    },
    StaticProduct {
        id: "6",
        slug: "dekorasi-lamaran-romantis",
        name: "Dekorasi Lamaran Romantis",
        price: 2_500_000,
        original_price: None,
        category: Category::Dekorasi,
        description: "Paket dekorasi lamaran lengkap dengan backdrop, balon, bunga, lilin, \
                      dan properti romantis lainnya. Tim profesional kami akan mendekorasi \
                      venue pilihan Anda.",
        short_description: "Paket dekorasi lamaran lengkap dengan tim profesional",
        images: &["/assets/products/dekorasi-lamaran.jpg"],
        featured: true,
        best_seller: false,
        exclusive: false,
        product_url: "https://bloomgift.com/produk/dekorasi-lamaran-romantis",
    },
    StaticProduct {
        id: "7",
        slug: "buket-lily-putih-elegan",
        name: "Buket Lily Putih Elegan",
        price: 520_000,
        original_price: None,
        category: Category::BuketBunga,
        description: "Buket lily putih yang memancarkan keanggunan dan kemewahan. Terdiri \
                      dari 15 tangkai lily putih segar dengan aroma yang memikat.",
        short_description: "15 tangkai lily putih segar yang elegan",
        images: &["/assets/products/buket-lily.jpg"],
        featured: false,
        best_seller: false,
        exclusive: false,
        product_url: "https://bloomgift.com/produk/buket-lily-putih-elegan",
    },
    StaticProduct {
        id: "8",
        slug: "kue-pengantin-3-tier",
        name: "Kue Pengantin 3 Tier",
        price: 2_800_000,
        original_price: None,
        category: Category::KueTart,
        description: "Kue pengantin 3 tingkat dengan desain elegan dan mewah. Dibuat \
                      dengan bahan premium dan dapat dikustomisasi sesuai tema pernikahan \
                      Anda.",
        short_description: "Kue pengantin 3 tingkat dengan desain custom",
        images: &["/assets/products/kue-pengantin.jpg"],
        featured: false,
        best_seller: false,
        exclusive: true,
        product_url: "https://bloomgift.com/produk/kue-pengantin-3-tier",
    },
    StaticProduct {
        id: "9",
        slug: "papan-duka-cita-simpati",
        name: "Papan Duka Cita Simpati",
        price: 2_500_000,
        original_price: None,
        category: Category::PapanBunga,
        description: "Papan duka cita simpati dengan desain elegan. Rangkaian bunga segar \
                      disusun oleh florist berpengalaman dan diantar langsung ke lokasi.",
        short_description: "Papan duka dengan rangkaian bunga segar",
        images: &["/assets/products/papan-duka.jpg"],
        featured: false,
        best_seller: false,
        exclusive: false,
        product_url: "https://bloomgift.com/produk/papan-duka-cita-simpati",
    },
    StaticProduct {
        id: "10",
        slug: "parsel-natal-elegan",
        name: "Parsel Natal Elegan",
        price: 3_000_000,
        original_price: None,
        category: Category::ParselNatal,
        description: "Parsel natal elegan dengan desain mewah. Berisi pilihan kue, cokelat, \
                      dan pernak-pernik natal untuk keluarga, teman, atau rekan bisnis.",
        short_description: "Parsel natal mewah untuk keluarga dan relasi",
        images: &["/assets/products/parsel-natal.jpg"],
        featured: false,
        best_seller: false,
        exclusive: false,
        product_url: "https://bloomgift.com/produk/parsel-natal-elegan",
    },
];

static TESTIMONIALS: [StaticTestimonial; 6] = [
    StaticTestimonial {
        id: "1",
        name: "Sarah Wijaya",
        role: "Pengusaha",
        content: "Buket bunganya sangat cantik dan segar! Pengiriman tepat waktu dan \
                  pelayanannya ramah sekali. Pasti akan order lagi untuk acara-acara \
                  spesial berikutnya.",
        rating: 5,
        product: "Buket Mawar Merah Premium",
    },
    StaticTestimonial {
        id: "2",
        name: "Budi Santoso",
        role: "Manager Marketing",
        content: "Hampers Lebaran dari sini selalu jadi pilihan utama untuk dikirim ke \
                  klien. Kualitas produk premium dan kemasan sangat elegan. Highly \
                  recommended!",
        rating: 5,
        product: "Hampers Lebaran Eksklusif",
    },
    StaticTestimonial {
        id: "3",
        name: "Dian Permata",
        role: "Ibu Rumah Tangga",
        content: "Kue ulang tahun untuk anak saya sesuai dengan ekspektasi. Rasanya enak, \
                  desainnya persis seperti yang diminta, dan pelayanannya sangat \
                  profesional.",
        rating: 5,
        product: "Kue Ulang Tahun Custom",
    },
    StaticTestimonial {
        id: "4",
        name: "Ahmad Faisal",
        role: "Dokter",
        content: "Dekorasi lamarannya AMAZING! Tim sangat profesional dan hasilnya \
                  melebihi ekspektasi. Terima kasih sudah membuat momen lamaran saya \
                  begitu spesial.",
        rating: 5,
        product: "Dekorasi Lamaran Romantis",
    },
    StaticTestimonial {
        id: "5",
        name: "Rina Melati",
        role: "Influencer",
        content: "Sudah beberapa kali order di sini dan tidak pernah mengecewakan. \
                  Kualitas bunga selalu fresh, kemasan cantik, dan pengiriman selalu on \
                  time!",
        rating: 5,
        product: "Buket Bunga Matahari",
    },
    StaticTestimonial {
        id: "6",
        name: "Hendro Wibowo",
        role: "CEO Startup",
        content: "Hampers bayi untuk keponakan sangat lengkap dan berkualitas. Kemasannya \
                  juga sangat instagramable. Penerima sangat senang dengan hadiahnya!",
        rating: 5,
        product: "Hampers Bayi Newborn",
    },
];

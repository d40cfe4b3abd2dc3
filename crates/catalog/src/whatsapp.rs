//! Outbound WhatsApp link and message builders.
//!
//! Link format, reproduced exactly for interoperability with the messaging
//! app: `https://wa.me/{digitsOnlyPhoneNumber}?text={urlEncodedMessage}`.
//! Numbers are stored digit-only with the country code prefix and no
//! leading `+`.

use bloomgift_core::slug::clean_slug;
use bloomgift_core::{CityMapping, Inquiry, Product, WhatsAppConfig};

/// Strip everything but digits.
#[must_use]
pub fn digits_only(phone: &str) -> String {
    phone.chars().filter(char::is_ascii_digit).collect()
}

/// Build a `wa.me` deep link.
#[must_use]
pub fn wa_link(phone: &str, message: &str) -> String {
    format!(
        "https://wa.me/{}?text={}",
        digits_only(phone),
        urlencoding::encode(message)
    )
}

/// Consultation link using the configured default number and message.
#[must_use]
pub fn consultation_link(config: &WhatsAppConfig) -> String {
    wa_link(&config.default_number, &config.consultation_message)
}

/// Order link for a product: the configured order message plus the product
/// name and its absolute page URL (built from the public site base URL and
/// the cleaned slug).
#[must_use]
pub fn product_order_link(config: &WhatsAppConfig, product: &Product, site_base_url: &str) -> String {
    let product_page = format!(
        "{}/produk/{}",
        site_base_url.trim_end_matches('/'),
        clean_slug(&product.slug)
    );
    let message = format!(
        "{}\nNama Produk: {}\nLink Produk: {}\n",
        config.order_message, product.name, product_page
    );
    wa_link(&config.default_number, &message)
}

/// Link routed to the number serving a covered city.
#[must_use]
pub fn city_link(city: &CityMapping, message: &str) -> String {
    wa_link(&city.whatsapp_number, message)
}

/// Follow-up greeting for an inquiry, routed to the customer's number.
#[must_use]
pub fn inquiry_followup_link(inquiry: &Inquiry) -> String {
    let message = format!("Halo {}, terima kasih telah menghubungi kami.", inquiry.name);
    wa_link(&inquiry.phone, &message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bloomgift_core::{Category, Island};

    #[test]
    fn test_wa_link_plain_message() {
        assert_eq!(
            wa_link("6281234567890", "Halo"),
            "https://wa.me/6281234567890?text=Halo"
        );
    }

    #[test]
    fn test_wa_link_encodes_message() {
        let link = wa_link("6281234567890", "Halo, saya mau pesan");
        assert_eq!(
            link,
            "https://wa.me/6281234567890?text=Halo%2C%20saya%20mau%20pesan"
        );
    }

    #[test]
    fn test_digits_only_strips_formatting() {
        assert_eq!(digits_only("+62 812-3456-7890"), "6281234567890");
    }

    #[test]
    fn test_product_order_link_uses_cleaned_slug() {
        let config = WhatsAppConfig {
            default_number: "6285646420488".to_owned(),
            consultation_message: String::new(),
            order_message: "Halo, saya tertarik dengan produk berikut:".to_owned(),
        };
        let product = Product {
            id: "1".to_owned(),
            slug: "https://old.example.com/produk/buket-tulip".to_owned(),
            name: "Buket Tulip".to_owned(),
            price: 300_000,
            original_price: None,
            category: Category::BuketBunga,
            description: String::new(),
            image_url: String::new(),
            images: Vec::new(),
            product_url: None,
            is_active: true,
            is_featured: false,
            is_best_seller: false,
            is_exclusive: false,
            is_premium: false,
            created_at: None,
        };
        let link = product_order_link(&config, &product, "https://bloomgift.com/");
        assert!(link.starts_with("https://wa.me/6285646420488?text="));
        assert!(link.contains(&*urlencoding::encode("https://bloomgift.com/produk/buket-tulip")));
    }

    #[test]
    fn test_city_link_uses_city_number() {
        let city = CityMapping::new(Island::Bali, "Denpasar", "6281111111111");
        assert!(city_link(&city, "Halo").starts_with("https://wa.me/6281111111111?"));
    }
}

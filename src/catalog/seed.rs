use crate::domain::aggregates::{Category, Product};
use crate::domain::value_objects::{LocalizedText, Money};

pub(super) fn categories() -> Vec<Category> {
    vec![
        Category::new("shirts", LocalizedText::new("เสื้อเชิ้ต", "Shirts")),
        Category::new("pants", LocalizedText::new("กางเกง", "Pants")),
        Category::new("dresses", LocalizedText::new("ชุดเดรส", "Dresses")),
        Category::new("skirts", LocalizedText::new("กระโปรง", "Skirts")),
        Category::new("traditional", LocalizedText::new("ชุดไทย", "Traditional Thai")),
        Category::new("accessories", LocalizedText::new("เครื่องประดับ", "Accessories")),
    ]
}

fn photo(id: &str) -> String { format!("https://images.unsplash.com/photo-{id}?w=400") }

pub(super) fn products() -> Vec<Product> {
    vec![
        Product::new("1", LocalizedText::new("เสื้อเชิ้ตผ้าไหมไทย", "Thai Silk Shirt"), Money::baht(1200), "shirts")
            .with_description(LocalizedText::new(
                "เสื้อเชิ้ตผ้าไหมไทยแท้ สีสวย ใส่สบาย เหมาะกับทุกโอกาส",
                "Authentic Thai silk shirt with beautiful colors, comfortable to wear, suitable for all occasions",
            ))
            .with_images([photo("1596755094514-f87e34085b2c"), photo("1596755094514-f87e34085b2c")])
            .with_sizes(["S", "M", "L", "XL"])
            .with_colors(["น้ำเงิน", "แดง", "เขียว"])
            .featured(),
        Product::new("2", LocalizedText::new("ชุดผ้าไทยประยุกต์", "Modern Thai Dress"), Money::baht(2500), "traditional")
            .with_description(LocalizedText::new(
                "ชุดผ้าไทยสไตล์โมเดิร์น ผสมผสานความเป็นไทยกับความทันสมัย",
                "Modern Thai dress combining traditional Thai elements with contemporary style",
            ))
            .with_images([photo("1595777457583-95e059d581b8"), photo("1595777457583-95e059d581b8")])
            .with_sizes(["S", "M", "L"])
            .with_colors(["ทอง", "เงิน", "น้ำเงิน"])
            .featured(),
        Product::new("3", LocalizedText::new("กางเกงผ้าฝ้าย", "Cotton Pants"), Money::baht(800), "pants")
            .with_description(LocalizedText::new(
                "กางเกงผ้าฝ้าย 100% นุ่มสบาย ระบายอากาศดี",
                "100% cotton pants, soft and comfortable with good breathability",
            ))
            .with_images([photo("1594633312681-425c7b97ccd1")])
            .with_sizes(["S", "M", "L", "XL", "XXL"])
            .with_colors(["ขาว", "ดำ", "เทา"]),
        Product::new("4", LocalizedText::new("เดรสลายดอกไม้", "Floral Dress"), Money::baht(1500), "dresses")
            .with_description(LocalizedText::new(
                "เดรสลายดอกไม้สวย ผ้าเนื้อดี ใส่สบาย เหมาะกับสาวๆ",
                "Beautiful floral dress with quality fabric, comfortable to wear, perfect for ladies",
            ))
            .with_images([photo("1572804013309-59a88b7e92f1")])
            .with_sizes(["S", "M", "L"])
            .with_colors(["ชมพู", "ฟ้า", "เหลือง"])
            .featured(),
        Product::new("5", LocalizedText::new("กระโปรงยีนส์", "Denim Skirt"), Money::baht(900), "skirts")
            .with_description(LocalizedText::new(
                "กระโปรงยีนส์คุณภาพดี ทรงสวย ใส่ได้หลายโอกาส",
                "High-quality denim skirt with beautiful cut, suitable for various occasions",
            ))
            .with_images([photo("1583496661160-fb5886a13d27")])
            .with_sizes(["S", "M", "L", "XL"])
            .with_colors(["น้ำเงินเข้ม", "น้ำเงินอ่อน"])
            .out_of_stock(),
        Product::new("6", LocalizedText::new("สร้อยคอเงินไทย", "Thai Silver Necklace"), Money::baht(3500), "accessories")
            .with_description(LocalizedText::new(
                "สร้อยคอเงินไทยแท้ ลายไทยประยุกต์ สวยงาม",
                "Authentic Thai silver necklace with modern Thai patterns, beautiful design",
            ))
            .with_images([photo("1515562141207-7a88fb7ce338")])
            .with_sizes(["One Size"])
            .with_colors(["เงิน"])
            .featured(),
        Product::new("7", LocalizedText::new("เสื้อโปโลผู้ชาย", "Men's Polo Shirt"), Money::baht(650), "shirts")
            .with_description(LocalizedText::new(
                "เสื้อโปโลผู้ชาย ผ้าคุณภาพดี ใส่สบาย เหมาะกับการทำงาน",
                "Men's polo shirt with quality fabric, comfortable to wear, suitable for work",
            ))
            .with_images([photo("1521572163474-6864f9cf17ab")])
            .with_sizes(["M", "L", "XL", "XXL"])
            .with_colors(["ขาว", "ดำ", "น้ำเงิน", "เทา"]),
        Product::new("8", LocalizedText::new("ชุดไทยจิตรลดา", "Thai Chitralada Dress"), Money::baht(4500), "traditional")
            .with_description(LocalizedText::new(
                "ชุดไทยจิตรลดา ผ้าไหมแท้ เหมาะกับงานพิธีการ",
                "Thai Chitralada dress in authentic silk, perfect for formal ceremonies",
            ))
            .with_images([photo("1594736797933-d0401ba2fe65")])
            .with_sizes(["S", "M", "L"])
            .with_colors(["ทอง", "น้ำเงิน", "แดงเข้ม"])
            .featured(),
    ]
}

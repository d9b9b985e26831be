#[cfg(test)]
mod qr_proptests {

    use prop::string::string_regex;
    use proptest::prelude::*;

    use qrlens::*;

    pub fn ec_level_strategy() -> BoxedStrategy<ECLevel> {
        prop_oneof![Just(ECLevel::L), Just(ECLevel::M), Just(ECLevel::Q), Just(ECLevel::H)].boxed()
    }

    pub fn round_trip_strategy(regex: &str) -> impl Strategy<Value = (ECLevel, bool, String)> {
        let pattern = format!(r"{regex}{{1,80}}");
        (ec_level_strategy(), any::<bool>(), string_regex(&pattern).unwrap())
            .prop_filter("Blank text is rejected by the encoder", |(_, _, data)| {
                !data.trim().is_empty()
            })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(24))]

        #[test]
        fn proptest_round_trip(params in round_trip_strategy(r"[ -~]")) {
            let (ecl, dark, data) = params;
            let mut config = if dark { RenderConfig::dark() } else { RenderConfig::new() };
            config.ec_level(ecl);

            let inspector = Inspector::default();
            let generated = inspector.generate(&data, &config).unwrap();
            let img = image::DynamicImage::ImageRgba8(generated.image);
            let res = inspector.read(&img).expect("Failed to read QR");

            prop_assert_eq!(&res.raw_text, &data);
            prop_assert_eq!(res.kind, generated.analysis.kind);
            prop_assert_eq!(&res.fields, &generated.analysis.fields);
            prop_assert_eq!(&res.raw_bytes_hex, &generated.analysis.raw_bytes_hex);
        }
    }
}

#[cfg(test)]
mod qr_tests {
    use test_case::test_case;

    use qrlens::{
        Decoder, ECLevel, Encoder, Inspector, ParsedFields, PayloadKind, QRError, QrDecoder,
        QrEncoder, RenderConfig, Rgb,
    };

    #[test_case("Hello, world!".to_string(), ECLevel::L; "test_qr_1")]
    #[test_case("TEST".to_string(), ECLevel::M; "test_qr_2")]
    #[test_case("12345".to_string(), ECLevel::Q; "test_qr_3")]
    #[test_case("OK".to_string(), ECLevel::H; "test_qr_4")]
    #[test_case("1234567890".repeat(15), ECLevel::H; "test_qr_5")]
    #[test_case("A11111111111111".repeat(11), ECLevel::M; "test_qr_6")]
    #[test_case("café crème".to_string(), ECLevel::Q; "test_qr_7")]
    fn test_qr(data: String, ecl: ECLevel) {
        let mut config = RenderConfig::new();
        config.size(400).ec_level(ecl);

        let img = QrEncoder.encode(&data, &config).unwrap();
        let decoded = QrDecoder::new().decode(&image::DynamicImage::ImageRgba8(img)).unwrap();

        assert_eq!(decoded.text, data);
    }

    #[test_case("https://example.com/path?x=1", PayloadKind::Url; "url")]
    #[test_case("WIFI:T:WPA;S:MyNet;P:secret;H:true;", PayloadKind::WiFi; "wifi")]
    #[test_case("BEGIN:VCARD\nFN:Grace Hopper\nTEL;TYPE=WORK:+1 555 0100\nEND:VCARD", PayloadKind::Contact; "contact")]
    #[test_case("mailto:grace@example.com?subject=COBOL", PayloadKind::Email; "email")]
    #[test_case("TEL:+15550100", PayloadKind::Phone; "phone")]
    #[test_case("smsto:+15550100:hello", PayloadKind::Sms; "sms")]
    #[test_case("geo:48.8584,2.2945,35", PayloadKind::Geo; "geo")]
    #[test_case("BEGIN:VEVENT\nSUMMARY:Demo\nDTSTART:20240301\nEND:VEVENT", PayloadKind::CalendarEvent; "event")]
    fn test_scan_matches_direct_analysis(data: &str, kind: PayloadKind) {
        let inspector = Inspector::default();
        let generated = inspector.generate(data, &RenderConfig::new()).unwrap();
        let res = inspector.read(&image::DynamicImage::ImageRgba8(generated.image)).unwrap();

        assert_eq!(res.kind, kind);
        assert_eq!(res.fields, generated.analysis.fields);
        assert!(res.symbol_metadata.version.is_some());
        assert!(res.symbol_metadata.mask_pattern.is_some());
    }

    #[test]
    fn test_custom_colors() {
        let mut config = RenderConfig::new();
        config.foreground(Rgb(0x1e, 0x3a, 0x8a)).background(Rgb(0xfe, 0xf3, 0xc7));

        let inspector = Inspector::default();
        let generated = inspector.generate("tel:+15550100", &config).unwrap();
        let res = inspector.read(&image::DynamicImage::ImageRgba8(generated.image)).unwrap();

        let ParsedFields::Phone(f) = res.fields else { panic!("Expected phone fields") };
        assert_eq!(f.number, "+15550100");
    }

    #[test]
    fn test_no_symbol() {
        let img = image::DynamicImage::new_rgb8(200, 200);
        let res = Inspector::default().read(&img);
        assert!(matches!(res, Err(QRError::SymbolNotFound)));
    }

    #[test]
    fn test_dark_symbol_needs_inversion() {
        let img = QrEncoder.encode("inverted", &RenderConfig::dark()).unwrap();
        let img = image::DynamicImage::ImageRgba8(img);

        let decoded = QrDecoder::new().decode(&img).unwrap();
        assert_eq!(decoded.text, "inverted");
    }
}

mod tests {
    use chaselight::{PIXEL_COUNT, PixelStore, Rgb};

    #[test]
    fn test_set_pixel_in_range() {
        let mut store = PixelStore::new();
        store.set_pixel(0, 1, 2, 3);
        assert_eq!(store.as_slice()[0], Rgb { r: 1, g: 2, b: 3 });
    }

    #[test]
    fn test_set_pixel_out_of_range_is_noop() {
        let mut store = PixelStore::new();
        let before = store.as_slice().to_vec();

        store.set_pixel(PIXEL_COUNT, 0xFF, 0xFF, 0xFF);
        store.set_pixel(PIXEL_COUNT + 100, 0xFF, 0xFF, 0xFF);
        store.set_pixel(usize::MAX, 0xFF, 0xFF, 0xFF);

        assert_eq!(store.as_slice(), before.as_slice());
    }

    #[test]
    fn test_clear_pixel() {
        let mut store = PixelStore::new();
        store.set_pixel(3, 0x10, 0x20, 0x30);
        store.clear_pixel(3);
        assert_eq!(store.as_slice()[3], Rgb { r: 0, g: 0, b: 0 });

        // Out of range clears are ignored as well.
        store.clear_pixel(PIXEL_COUNT);
    }

    #[test]
    fn test_clear_all() {
        let mut store = PixelStore::new();
        for i in 0..PIXEL_COUNT {
            store.set_pixel(i, 0xAA, 0xBB, 0xCC);
        }
        store.clear();
        assert!(
            store
                .as_slice()
                .iter()
                .all(|c| *c == Rgb { r: 0, g: 0, b: 0 })
        );
    }
}

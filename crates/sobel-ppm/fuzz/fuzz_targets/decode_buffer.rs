#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut decoder = sobel_ppm::PPMDecoder::new(data);
    if let Ok(image) = decoder.decode_raw() {
        // decoded length always matches the header
        let (width, height) = decoder.get_dimensions().unwrap();
        let colorspace = decoder.get_colorspace().unwrap();
        assert_eq!(image.len(), width * height * colorspace.num_components());
    }
});

//! Offset alignment of extracted images onto item rows.

use crate::models::quotation::{ImageBlob, ItemRecord};

/// Number of leading images skipped (logos, letterheads).
pub fn image_offset(image_count: usize, item_count: usize) -> usize {
    image_count.saturating_sub(item_count)
}

/// Index of the image belonging to the row at `row`, if any.
pub fn image_index_for_row(image_count: usize, item_count: usize, row: usize) -> Option<usize> {
    let index = image_offset(image_count, item_count) + row;
    (index < image_count).then_some(index)
}

/// Attach at most one image to each item; trailing images map onto trailing rows.
pub fn align_images(items: &mut [ItemRecord], images: &[ImageBlob]) {
    let item_count = items.len();
    for (row, item) in items.iter_mut().enumerate() {
        item.images = image_index_for_row(images.len(), item_count, row)
            .map(|i| vec![images[i].clone()])
            .unwrap_or_default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn images(n: u8) -> Vec<ImageBlob> {
        (0..n).map(|i| ImageBlob::new(vec![i])).collect()
    }

    fn items(n: usize) -> Vec<ItemRecord> {
        (0..n).map(|_| ItemRecord::default()).collect()
    }

    #[test]
    fn test_surplus_leading_images_are_skipped() {
        let mut rows = items(3);
        align_images(&mut rows, &images(5));

        let got: Vec<Vec<u8>> = rows.iter().map(|r| r.images[0].data.clone()).collect();
        assert_eq!(got, vec![vec![2], vec![3], vec![4]]);
        assert!(rows.iter().all(|r| r.images.len() == 1));
    }

    #[test]
    fn test_fewer_images_than_items() {
        let mut rows = items(5);
        align_images(&mut rows, &images(2));

        assert_eq!(rows[0].images, vec![ImageBlob::new(vec![0])]);
        assert_eq!(rows[1].images, vec![ImageBlob::new(vec![1])]);
        assert!(rows[2..].iter().all(|r| r.images.is_empty()));
    }

    #[test]
    fn test_offset() {
        assert_eq!(image_offset(5, 3), 2);
        assert_eq!(image_offset(2, 5), 0);
        assert_eq!(image_index_for_row(0, 3, 0), None);
        assert_eq!(image_index_for_row(4, 0, 0), None);
    }
}

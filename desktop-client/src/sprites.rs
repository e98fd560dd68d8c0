use common::games::snake::{SpriteCache, SpriteId};
use common::log;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::task::JoinSet;

pub struct DecodedSprite {
    size: [usize; 2],
    pixels: Vec<u8>,
}

#[derive(Default)]
struct LoadState {
    decoded: Vec<(SpriteId, DecodedSprite)>,
    finished: bool,
}

/// Hand-off point between the loader thread and the UI thread.
#[derive(Clone, Default)]
pub struct SpriteStore {
    inner: Arc<Mutex<LoadState>>,
}

impl SpriteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// True once every sprite was attempted, whether or not it loaded.
    pub fn is_finished(&self) -> bool {
        self.lock().finished
    }

    pub fn take_decoded(&self) -> Vec<(SpriteId, DecodedSprite)> {
        std::mem::take(&mut self.lock().decoded)
    }

    fn insert(&self, id: SpriteId, sprite: DecodedSprite) {
        self.lock().decoded.push((id, sprite));
    }

    fn mark_finished(&self) {
        self.lock().finished = true;
    }

    fn lock(&self) -> MutexGuard<'_, LoadState> {
        // The state stays consistent even if a holder panicked.
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

pub fn spawn_loader(directory: PathBuf, store: SpriteStore) -> std::thread::JoinHandle<()> {
    std::thread::spawn(move || {
        match tokio::runtime::Runtime::new() {
            Ok(rt) => {
                rt.block_on(load_all(&directory, &store));
            }
            Err(e) => {
                log!("Failed to start sprite loader runtime: {}", e);
            }
        }
        store.mark_finished();
    })
}

/// Loads every sprite concurrently and returns how many succeeded.
pub async fn load_all(directory: &Path, store: &SpriteStore) -> usize {
    let mut tasks = JoinSet::new();
    for id in SpriteId::ALL {
        let path = directory.join(id.file_name());
        tasks.spawn(async move {
            let result = load_sprite(&path).await;
            (id, result)
        });
    }

    let mut loaded = 0;
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok((id, Ok(sprite))) => {
                store.insert(id, sprite);
                loaded += 1;
            }
            Ok((id, Err(e))) => log!("Sprite {} unavailable: {}", id, e),
            Err(e) => log!("Sprite loading task failed: {}", e),
        }
    }

    log!(
        "Loaded {}/{} sprites from {}",
        loaded,
        SpriteId::ALL.len(),
        directory.display()
    );
    loaded
}

async fn load_sprite(path: &Path) -> Result<DecodedSprite, String> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;

    tokio::task::spawn_blocking(move || decode_sprite(&bytes))
        .await
        .map_err(|e| format!("Decoder task failed: {}", e))?
}

pub fn decode_sprite(bytes: &[u8]) -> Result<DecodedSprite, String> {
    let image = image::load_from_memory(bytes)
        .map_err(|e| format!("Invalid sprite image: {}", e))?
        .to_rgba8();

    Ok(DecodedSprite {
        size: [image.width() as usize, image.height() as usize],
        pixels: image.into_raw(),
    })
}

/// GPU textures for the sprites that finished loading so far.
#[derive(Default)]
pub struct TextureCache {
    textures: HashMap<SpriteId, egui::TextureHandle>,
}

impl TextureCache {
    pub fn upload_ready(&mut self, ctx: &egui::Context, store: &SpriteStore) {
        for (id, sprite) in store.take_decoded() {
            let color_image = egui::ColorImage::from_rgba_unmultiplied(sprite.size, &sprite.pixels);
            let texture = ctx.load_texture(id.name(), color_image, Default::default());
            self.textures.insert(id, texture);
        }
    }
}

impl SpriteCache for TextureCache {
    type Sprite = egui::TextureHandle;

    fn lookup(&self, id: SpriteId) -> Option<&egui::TextureHandle> {
        self.textures.get(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dir() -> PathBuf {
        let random_number: u32 = rand::random();
        let dir = std::env::temp_dir().join(format!("snake_canvas_sprites_{}", random_number));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let image = image::RgbaImage::from_pixel(width, height, image::Rgba([255, 0, 0, 255]));
        let mut bytes = std::io::Cursor::new(Vec::new());
        image.write_to(&mut bytes, image::ImageFormat::Png).unwrap();
        bytes.into_inner()
    }

    #[test]
    fn test_decode_sprite() {
        let sprite = decode_sprite(&png_bytes(3, 2)).unwrap();
        assert_eq!(sprite.size, [3, 2]);
        assert_eq!(sprite.pixels.len(), 3 * 2 * 4);
    }

    #[test]
    fn test_decode_garbage_fails() {
        assert!(decode_sprite(b"not a png").is_err());
    }

    #[tokio::test]
    async fn test_load_all_skips_missing_files() {
        let dir = temp_dir();
        std::fs::write(dir.join("apple.png"), png_bytes(4, 4)).unwrap();
        std::fs::write(dir.join("head_up.png"), png_bytes(4, 4)).unwrap();

        let store = SpriteStore::new();
        let loaded = load_all(&dir, &store).await;

        assert_eq!(loaded, 2);
        let mut ids: Vec<SpriteId> = store.take_decoded().into_iter().map(|(id, _)| id).collect();
        ids.sort_by_key(|id| id.name());
        assert_eq!(ids, vec![SpriteId::Apple, SpriteId::HeadUp]);
        assert!(store.take_decoded().is_empty());

        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn test_spawn_loader_marks_finished_even_without_files() {
        let dir = std::env::temp_dir().join("snake_canvas_sprites_that_do_not_exist");
        let store = SpriteStore::new();
        spawn_loader(dir, store.clone()).join().unwrap();
        assert!(store.is_finished());
        assert!(store.take_decoded().is_empty());
    }
}

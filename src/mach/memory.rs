use super::Word;
use crate::error;
use crate::lang::Error;
use rand::Rng;
use tracing::debug;

type Result<T> = std::result::Result<T, Error>;

/// Largest number of cells `MEM` may ask for.
pub const MAX_MEMORY_SIZE: usize = 10_000_000;

/// ## Contents of freshly allocated cells
///
/// `Random` is the default so that programs reading cells they never
/// wrote get garbage instead of a convenient zero. Tests use `Zero`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fill {
    Zero,
    Random,
}

impl Default for Fill {
    fn default() -> Fill {
        Fill::Random
    }
}

/// ## The one and only addressable storage
///
/// Every resize throws the old cells away.

#[derive(Debug, Default)]
pub struct MemoryPool {
    fill: Fill,
    cells: Vec<Word>,
}

impl MemoryPool {
    pub fn new(fill: Fill) -> MemoryPool {
        MemoryPool {
            fill,
            cells: vec![],
        }
    }

    pub fn fill(&self) -> Fill {
        self.fill
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    fn index(&self, index: Word) -> Result<usize> {
        if index >= 0 && (index as usize) < self.cells.len() {
            Ok(index as usize)
        } else {
            Err(error!(MemoryIndex; format!("INDEX {} OF {}", index, self.cells.len())))
        }
    }

    pub fn get(&self, index: Word) -> Result<Word> {
        let index = self.index(index)?;
        Ok(self.cells[index])
    }

    pub fn set(&mut self, index: Word, word: Word) -> Result<()> {
        let index = self.index(index)?;
        self.cells[index] = word;
        Ok(())
    }

    pub fn resize(&mut self, len: Word) -> Result<()> {
        if len < 0 || len as usize > MAX_MEMORY_SIZE {
            return Err(error!(MemoryLimit; format!("{} CELLS REQUESTED", len)));
        }
        let len = len as usize;
        debug!(len, fill = ?self.fill, "resizing memory pool");
        self.cells = match self.fill {
            Fill::Zero => vec![0; len],
            Fill::Random => {
                let mut rng = rand::thread_rng();
                (0..len).map(|_| rng.gen::<Word>()).collect()
            }
        };
        Ok(())
    }
}

// ============================================================================
// generate_sample : jeu de données de démonstration
// ============================================================================
// Écrit x1.txt, y1.txt, y2.txt, x3.txt, y3.txt dans le format produit par la
// simulation, pour tester cafeplot sans lancer la simulation :
//   x*.txt : "t:<tick>"
//   y1.txt : "<étudiants au comptoir>"
//   y2/y3  : "P:<soupes>,C:<plats>,D:<desserts>=<total>"
//
// Usage : generate_sample [répertoire]   (défaut : ../source)
// ============================================================================

use std::path::PathBuf;

use anyhow::{Context, Result};

/// Nombre d'échantillons par fichier
const SAMPLES: usize = 120;

/// Capacité du comptoir et de la cuisine (assiettes par type)
const COUNTER_SLOTS: u64 = 4;
const KITCHEN_SLOTS: u64 = 6;

/// PRNG déterministe minimal (xorshift64*)
struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        // L'état ne doit jamais valoir 0
        Self { state: seed.max(1) }
    }

    fn next_u64(&mut self) -> u64 {
        self.state ^= self.state >> 12;
        self.state ^= self.state << 25;
        self.state ^= self.state >> 27;
        self.state.wrapping_mul(0x2545_F491_4F6C_DD1D)
    }

    /// Entier dans 0..=max
    fn below_or_eq(&mut self, max: u64) -> u64 {
        self.next_u64() % (max + 1)
    }
}

/// Une ligne "P:p,C:c,D:d=total"
fn plates_line(out: &mut String, rng: &mut SimpleRng, slots: u64) {
    let p = rng.below_or_eq(slots);
    let c = rng.below_or_eq(slots);
    let d = rng.below_or_eq(slots);
    out.push_str(&format!("P:{},C:{},D:{}={}\n", p, c, d, p + c + d));
}

/// Contenu des cinq fichiers, une ligne par échantillon
struct SampleFiles {
    x1: String,
    y1: String,
    y2: String,
    x3: String,
    y3: String,
}

impl SampleFiles {
    /// Paires (nom de fichier, contenu)
    fn entries(&self) -> [(&'static str, &str); 5] {
        [
            ("x1.txt", self.x1.as_str()),
            ("y1.txt", self.y1.as_str()),
            ("y2.txt", self.y2.as_str()),
            ("x3.txt", self.x3.as_str()),
            ("y3.txt", self.y3.as_str()),
        ]
    }
}

/// Produit `samples` lignes par fichier à partir de `seed`
fn generate(samples: usize, seed: u64) -> SampleFiles {
    let mut rng = SimpleRng::new(seed);
    let mut files = SampleFiles {
        x1: String::new(),
        y1: String::new(),
        y2: String::new(),
        x3: String::new(),
        y3: String::new(),
    };

    // File d'attente : marche aléatoire bornée à 0
    let mut queue: u64 = 0;
    for tick in 0..samples {
        queue = match rng.below_or_eq(2) {
            0 => queue.saturating_sub(1),
            1 => queue,
            _ => queue + 1,
        };

        files.x1.push_str(&format!("t:{}\n", tick));
        files.y1.push_str(&format!("{}\n", queue));
        plates_line(&mut files.y2, &mut rng, COUNTER_SLOTS);

        // La cuisine est échantillonnée avec son propre décalage
        files.x3.push_str(&format!("t:{}\n", tick * 2 + 1));
        plates_line(&mut files.y3, &mut rng, KITCHEN_SLOTS);
    }

    files
}

fn main() -> Result<()> {
    let dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("../source"));

    std::fs::create_dir_all(&dir)
        .with_context(|| format!("creating output directory {}", dir.display()))?;

    let files = generate(SAMPLES, 42);
    for (name, content) in files.entries() {
        let path = dir.join(name);
        std::fs::write(&path, content).with_context(|| format!("writing {}", path.display()))?;
    }

    println!("Wrote {} samples per file to {}", SAMPLES, dir.display());
    Ok(())
}

// ============================================================================
// Tests unitaires
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use cafeplot::models::{SampleSource, SampleStream, Series};
    use cafeplot::source::parse_samples;
    use cafeplot::Config;

    /// Relit un fichier généré avec la source (et donc le délimiteur) configurée
    fn parse_as(files: &SampleFiles, source: &SampleSource) -> SampleStream {
        let name = source.path.file_name().unwrap().to_str().unwrap();
        let (_, content) = files
            .entries()
            .into_iter()
            .find(|(entry, _)| *entry == name)
            .unwrap_or_else(|| panic!("no generated file for {}", name));
        SampleStream::new(source.path.clone(), parse_samples(content, source.delimiter))
    }

    #[test]
    fn test_every_line_parses_with_default_delimiters() {
        let files = generate(50, 7);

        for panel in &Config::default().panels {
            let x = parse_as(&files, &panel.x);
            let y = parse_as(&files, &panel.y);
            assert_eq!(x.len(), 50, "{}", x.path.display());
            assert_eq!(y.len(), 50, "{}", y.path.display());

            let series = Series::new(x, y).unwrap();
            assert_eq!(series.len(), 50);
        }
    }

    #[test]
    fn test_values_match_simulation_formats() {
        let files = generate(10, 7);

        let ticks = parse_samples(&files.x1, Some(':'));
        assert_eq!(ticks, (0..10).collect::<Vec<u64>>());

        let kitchen_ticks = parse_samples(&files.x3, Some(':'));
        assert_eq!(kitchen_ticks, (0..10).map(|t| t * 2 + 1).collect::<Vec<u64>>());

        // Avec '=', seul le total reste et il ne dépasse pas la capacité
        for total in parse_samples(&files.y3, Some('=')) {
            assert!(total <= 3 * KITCHEN_SLOTS);
        }
        for total in parse_samples(&files.y2, Some('=')) {
            assert!(total <= 3 * COUNTER_SLOTS);
        }
    }

    #[test]
    fn test_same_seed_same_files() {
        let first = generate(20, 42);
        let second = generate(20, 42);
        assert_eq!(first.entries(), second.entries());
    }
}

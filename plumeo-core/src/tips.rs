//! Rotating writing tips shown next to the editor.
//!
//! The next tip avoids the ones shown recently, and once an analysis is in,
//! it is biased toward the categories the improvements mention.

use rand::Rng;

use crate::model::Analysis;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TipCategory {
    Vocabulary,
    Grammar,
    Organization,
    Style,
    General,
}

impl TipCategory {
    /// Short badge shown above the tip card.
    pub fn badge(&self) -> &'static str {
        match self {
            TipCategory::Grammar => "Langue",
            TipCategory::Vocabulary => "Lexique",
            TipCategory::Organization => "Structure",
            TipCategory::Style | TipCategory::General => "Conseil",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Tip {
    pub text: &'static str,
    pub category: TipCategory,
}

macro_rules! tip {
    ($text:expr, $category:ident) => {
        Tip {
            text: $text,
            category: TipCategory::$category,
        }
    };
}

pub const TIPS: &[Tip] = &[
    tip!("Remplace le verbe 'faire' par des verbes plus précis : construire, préparer, cuisiner, rédiger...", Vocabulary),
    tip!("Évite les répétitions ! Utilise des synonymes ou des pronoms pour désigner tes personnages.", Style),
    tip!("Utilise des connecteurs logiques comme 'pourtant', 'néanmoins' ou 'ainsi' pour lier tes idées.", Organization),
    tip!("Varie la longueur de tes phrases. Des phrases courtes pour l'action, de plus longues pour la description.", Style),
    tip!("N'oublie pas l'accord du participe passé avec l'auxiliaire 'être' : il s'accorde avec le sujet.", Grammar),
    tip!("Avec l'auxiliaire 'avoir', le participe passé ne s'accorde jamais avec le sujet, mais avec le COD s'il est placé avant.", Grammar),
    tip!("La ponctuation est ton amie. Elle donne du rythme et aide le lecteur à respirer.", Style),
    tip!("Accroche ton lecteur dès les premières lignes avec une question ou une image forte.", Style),
    tip!("Décris ce que tes personnages ressentent : pas seulement ce qu'ils voient, mais aussi ce qu'ils entendent ou sentent.", Style),
    tip!("Utilise des métaphores pour transformer une idée abstraite en image concrète.", Style),
    tip!("Relis ton texte à haute voix : si tu manques de souffle, c'est que tes phrases sont trop longues !", General),
    tip!("Mémorise l'orthographe des mots 'invariables' : toujours, déjà, bientôt, parfois, souvent.", Grammar),
    tip!("Pour savoir s'il faut écrire -é ou -er, remplace le verbe par 'vendre'. Si on peut dire 'vendu', c'est -é.", Grammar),
    tip!("Dans un récit au passé, utilise l'imparfait pour le décor et le passé simple pour les actions soudaines.", Grammar),
    tip!("Donne de la personnalité à tes personnages par un détail unique : une cicatrice, un tic de langage, un chapeau...", Style),
    tip!("Évite les clichés comme 'une peur bleue' ou 'un froid de canard'. Essaie d'inventer tes propres expressions.", Style),
    tip!("Les adverbes en '-ment' sont utiles, mais n'en abuse pas. Un bon verbe est souvent plus puissant.", Vocabulary),
    tip!("Soigne ta conclusion. Elle doit répondre aux attentes du lecteur ou ouvrir sur un nouvel horizon.", Organization),
    tip!("Fais toujours un plan au brouillon. C'est la boussole qui t'empêchera de te perdre en chemin.", Organization),
    tip!("Le dictionnaire n'est pas ton ennemi. En cas de doute, vérifie l'orthographe ou le sens d'un mot.", General),
    tip!("Le point d'exclamation est comme une épice : un peu suffit, trop gâche tout le plat !", Style),
    tip!("Les dialogues rendent ton récit vivant. Utilise-les pour montrer le caractère de tes personnages.", Style),
    tip!("Vérifie les homophones : a (verbe) / à (préposition), ou (choix) / où (lieu), ce (démonstratif) / se (pronom).", Grammar),
    tip!("Lis régulièrement ! C'est la meilleure façon d'enrichir ton vocabulaire sans t'en rendre compte.", General),
    tip!("Cherche l'adjectif exact. Au lieu de 'beau', utilise 'majestueux', 'splendide' ou 'radieux'.", Vocabulary),
    tip!("Évite les pléonasmes : ne dis pas 'monter en haut' ou 'prévoir d'avance'.", Style),
    tip!("Une copie propre et bien présentée donne tout de suite une meilleure impression au correcteur.", General),
    tip!("Le présent de narration peut donner un sentiment d'urgence et d'immédiateté à tes scènes d'action.", Style),
    tip!("Fais une pause de 5 minutes après avoir fini d'écrire avant de te relancer dans la relecture finale.", General),
    tip!("Si tu bloques, ferme les yeux et imagine la scène comme un film dans ta tête.", General),
    tip!("Repère les 'mots béquilles' comme 'puis', 'ensuite', 'alors'. Remplace-les par des transitions plus fluides.", Organization),
    tip!("Crée des champs lexicaux riches pour tes descriptions : par exemple, tout le vocabulaire de la mer.", Vocabulary),
    tip!("N'oublie pas la cédille sous le 'c' devant 'a', 'o', 'u' pour garder le son [s] (comme dans 'garçon').", Grammar),
    tip!("Attention au pluriel des noms composés : souvent, seuls le nom et l'adjectif prennent la marque du pluriel.", Grammar),
    tip!("Utilise des comparaisons originales : 'ses yeux brillaient comme...' (évite 'des étoiles').", Style),
    tip!("La concordance des temps est essentielle pour que ton récit reste logique et compréhensible.", Grammar),
    tip!("Bannis le langage SMS de tes rédactions, même pour les dialogues (sauf si c'est l'effet recherché !).", Style),
    tip!("Varie les verbes de parole : ne te contente pas de 'dit-il'. Utilise 'chuchota-t-il', 'répliqua-t-elle'...", Vocabulary),
    tip!("Ne dis pas que ton personnage a peur, montre ses mains qui tremblent et son cœur qui bat.", Style),
    tip!("Fais confiance à ton imagination. C'est ton super-pouvoir le plus précieux !", General),
];

/// Current tip plus a short memory of what was shown recently.
#[derive(Debug, Clone)]
pub struct TipDeck {
    current: usize,
    history: Vec<usize>,
}

impl TipDeck {
    pub fn new(rng: &mut impl Rng) -> Self {
        Self {
            current: rng.gen_range(0..TIPS.len()),
            history: Vec::new(),
        }
    }

    pub fn current(&self) -> &'static Tip {
        &TIPS[self.current]
    }

    /// Move to the next tip, skipping the last five shown and, when an
    /// analysis is available, usually (4 times out of 5) drawing from the
    /// categories its improvements point at.
    pub fn advance(&mut self, analysis: Option<&Analysis>, rng: &mut impl Rng) {
        let next = self.pick(analysis, rng);
        self.current = next;
        self.history.push(next);
        if self.history.len() > 10 {
            let overflow = self.history.len() - 10;
            self.history.drain(..overflow);
        }
    }

    fn pick(&self, analysis: Option<&Analysis>, rng: &mut impl Rng) -> usize {
        let recent_start = self.history.len().saturating_sub(5);
        let recent = &self.history[recent_start..];

        let mut pool: Vec<usize> = (0..TIPS.len())
            .filter(|i| !recent.contains(i) && *i != self.current)
            .collect();

        if let Some(analysis) = analysis {
            let prioritized = prioritized_categories(analysis);
            if !prioritized.is_empty() {
                let matching: Vec<usize> = pool
                    .iter()
                    .copied()
                    .filter(|&i| prioritized.contains(&TIPS[i].category))
                    .collect();
                if !matching.is_empty() && rng.gen::<f64>() > 0.2 {
                    pool = matching;
                }
            }
        }

        if pool.is_empty() {
            pool = (0..TIPS.len()).filter(|i| *i != self.current).collect();
        }
        pool[rng.gen_range(0..pool.len())]
    }
}

/// Categories whose French keywords appear in the improvement feedback.
pub(crate) fn prioritized_categories(analysis: &Analysis) -> Vec<TipCategory> {
    let improvements = analysis.improvements.join(" ").to_lowercase();
    let mentions = |keywords: &[&str]| keywords.iter().any(|k| improvements.contains(k));

    let mut categories = Vec::new();
    if mentions(&["grammaire", "orthographe", "conjugaison"]) {
        categories.push(TipCategory::Grammar);
    }
    if mentions(&["vocabulaire", "mots", "précis"]) {
        categories.push(TipCategory::Vocabulary);
    }
    if mentions(&["organisation", "structure", "connecteur"]) {
        categories.push(TipCategory::Organization);
    }
    if mentions(&["style", "répétition", "rythme"]) {
        categories.push(TipCategory::Style);
    }
    categories
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Advice;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn analysis_with_improvements(improvements: &[&str]) -> Analysis {
        Analysis {
            summary: String::new(),
            score: 20.0,
            strengths: Vec::new(),
            improvements: improvements.iter().map(|s| s.to_string()).collect(),
            advice: Advice {
                organization: String::new(),
                vocabulary: String::new(),
                grammar: String::new(),
                style: String::new(),
            },
            annotated_text: String::new(),
        }
    }

    #[test]
    fn test_advance_avoids_recently_shown() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut deck = TipDeck::new(&mut rng);

        let mut last_five = Vec::new();
        for _ in 0..50 {
            let before = deck.current;
            deck.advance(None, &mut rng);
            assert_ne!(deck.current, before);
            assert!(!last_five.contains(&deck.current));
            last_five.push(deck.current);
            if last_five.len() > 5 {
                last_five.remove(0);
            }
        }
    }

    #[test]
    fn test_history_is_bounded() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut deck = TipDeck::new(&mut rng);
        for _ in 0..30 {
            deck.advance(None, &mut rng);
        }
        assert!(deck.history.len() <= 10);
    }

    #[test]
    fn test_prioritized_categories_from_keywords() {
        let analysis = analysis_with_improvements(&[
            "Attention à la grammaire et à l'orthographe",
            "Varie la structure de tes phrases",
        ]);
        let categories = prioritized_categories(&analysis);
        assert!(categories.contains(&TipCategory::Grammar));
        assert!(categories.contains(&TipCategory::Organization));
        assert!(!categories.contains(&TipCategory::Vocabulary));
    }

    #[test]
    fn test_no_keywords_means_no_bias() {
        let analysis = analysis_with_improvements(&["Continue comme ça"]);
        assert!(prioritized_categories(&analysis).is_empty());
    }
}

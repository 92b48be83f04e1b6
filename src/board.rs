// Mailbox layout: 4 rows x 10 columns, index = row * 10 + col.
// Row 1 is rank 2 (a2 = 11 .. h2 = 18), row 2 is rank 1 (a1 = 21 .. h1 = 28).
// Everything else is an offboard sentinel.

use std::fmt;
use std::ops::{ControlFlow, Deref, DerefMut};

use crate::error::{EngineError, EngineResult};
use crate::utils::{is_playable, square_name, PLAYABLE_SQUARES};

pub type Square = usize;

pub const BOARD_WIDTH: usize = 10;
pub const BOARD_SIZE: usize = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White = 0,
    Black = 1,
}

impl Color {
    pub fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Piece {
    WhiteKing = 0,
    WhiteQueen = 1,
    WhiteRook = 2,
    WhiteBishop = 3,
    BlackKing = 4,
    BlackQueen = 5,
    BlackRook = 6,
    BlackBishop = 7,
    Empty = 8,
    Offboard = 9,
}

const ROYAL_OFFSETS: [isize; 8] = [1, -1, 10, -10, 11, -11, 9, -9];
const ROOK_OFFSETS: [isize; 4] = [1, -1, 10, -10];
const BISHOP_OFFSETS: [isize; 4] = [11, -11, 9, -9];

impl Piece {
    pub fn color(self) -> Option<Color> {
        match self {
            Piece::WhiteKing | Piece::WhiteQueen | Piece::WhiteRook | Piece::WhiteBishop => {
                Some(Color::White)
            }
            Piece::BlackKing | Piece::BlackQueen | Piece::BlackRook | Piece::BlackBishop => {
                Some(Color::Black)
            }
            Piece::Empty | Piece::Offboard => None,
        }
    }

    /// Material weight, white-positive.
    pub fn weight(self) -> i32 {
        match self {
            Piece::WhiteKing => 10_000,
            Piece::WhiteQueen => 900,
            Piece::WhiteRook => 500,
            Piece::WhiteBishop => 300,
            Piece::BlackKing => -10_000,
            Piece::BlackQueen => -900,
            Piece::BlackRook => -500,
            Piece::BlackBishop => -300,
            Piece::Empty | Piece::Offboard => 0,
        }
    }

    /// Direction offsets in mailbox units. Kings and queens share a table.
    pub fn offsets(self) -> &'static [isize] {
        match self {
            Piece::WhiteKing | Piece::WhiteQueen | Piece::BlackKing | Piece::BlackQueen => {
                &ROYAL_OFFSETS
            }
            Piece::WhiteRook | Piece::BlackRook => &ROOK_OFFSETS,
            Piece::WhiteBishop | Piece::BlackBishop => &BISHOP_OFFSETS,
            Piece::Empty | Piece::Offboard => &[],
        }
    }

    /// Only rooks repeat their offset; everything else steps once.
    pub fn slides(self) -> bool {
        matches!(self, Piece::WhiteRook | Piece::BlackRook)
    }

    pub fn is_king(self) -> bool {
        matches!(self, Piece::WhiteKing | Piece::BlackKing)
    }

    pub fn king(color: Color) -> Piece {
        match color {
            Color::White => Piece::WhiteKing,
            Color::Black => Piece::BlackKing,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Piece::WhiteKing => 'K',
            Piece::WhiteQueen => 'Q',
            Piece::WhiteRook => 'R',
            Piece::WhiteBishop => 'B',
            Piece::BlackKing => 'k',
            Piece::BlackQueen => 'q',
            Piece::BlackRook => 'r',
            Piece::BlackBishop => 'b',
            Piece::Empty => '.',
            Piece::Offboard => 'x',
        }
    }
}

/// A move record carrying enough to undo itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub piece: Piece,
    pub captured: Piece,
}

impl Move {
    pub fn new(from: Square, to: Square, piece: Piece, captured: Piece) -> Self {
        Self {
            from,
            to,
            piece,
            captured,
        }
    }

    pub fn is_capture(&self) -> bool {
        self.captured != Piece::Empty
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let from = square_name(self.from).unwrap_or("xx");
        let to = square_name(self.to).unwrap_or("xx");
        write!(f, "{}{}", from, to)
    }
}

/// Outcome of move generation for the side to move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Generated {
    /// At least one move, in board-scan then offset order.
    Moves(Vec<Move>),
    /// The enemy king can be taken; carries the first such capture found.
    KingCapture(Move),
    /// Nothing to play and no king capture.
    NoMoves,
}

impl Generated {
    pub fn moves(&self) -> &[Move] {
        match self {
            Generated::Moves(moves) => moves,
            Generated::KingCapture(_) | Generated::NoMoves => &[],
        }
    }

    pub fn into_moves(self) -> Vec<Move> {
        match self {
            Generated::Moves(moves) => moves,
            Generated::KingCapture(_) | Generated::NoMoves => Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [Piece; BOARD_SIZE],
    side: Color,
}

const START_LAYOUT: [(Square, Piece); 8] = [
    (11, Piece::WhiteKing),
    (12, Piece::WhiteRook),
    (17, Piece::BlackBishop),
    (18, Piece::BlackQueen),
    (21, Piece::WhiteQueen),
    (22, Piece::WhiteBishop),
    (27, Piece::BlackRook),
    (28, Piece::BlackKing),
];

impl Board {
    /// Playable squares empty, sentinels in place, white to move.
    pub fn empty() -> Self {
        let mut squares = [Piece::Offboard; BOARD_SIZE];
        for sq in PLAYABLE_SQUARES {
            squares[sq] = Piece::Empty;
        }
        Self {
            squares,
            side: Color::White,
        }
    }

    pub fn start() -> Self {
        let mut board = Self::empty();
        for (sq, piece) in START_LAYOUT {
            board.put(sq, piece);
        }
        board
    }

    /// Build a position from explicit placements. Sentinel squares and
    /// offboard markers are rejected.
    pub fn with_pieces(placements: &[(Square, Piece)], side: Color) -> EngineResult<Self> {
        let mut board = Self::empty();
        for &(sq, piece) in placements {
            if !is_playable(sq) {
                return Err(EngineError::InvalidSquare { square: sq });
            }
            if piece == Piece::Offboard {
                return Err(EngineError::InvalidPlacement { square: sq, piece });
            }
            board.put(sq, piece);
        }
        board.side = side;
        Ok(board)
    }

    pub fn piece_at(&self, sq: Square) -> Piece {
        self.squares.get(sq).copied().unwrap_or(Piece::Offboard)
    }

    pub fn side(&self) -> Color {
        self.side
    }

    /// (square, piece) over the playable area, rank 2 first.
    pub fn squares(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        PLAYABLE_SQUARES.into_iter().map(move |sq| (sq, self.squares[sq]))
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        let king = Piece::king(color);
        self.squares().find(|&(_, p)| p == king).map(|(sq, _)| sq)
    }

    // Sole mutation primitive; sentinels stay write-protected.
    pub(crate) fn put(&mut self, sq: Square, piece: Piece) {
        debug_assert!(is_playable(sq), "write to sentinel square {}", sq);
        self.squares[sq] = piece;
    }

    pub fn make_move(&mut self, mv: Move) {
        self.put(mv.to, mv.piece);
        self.put(mv.from, Piece::Empty);
        self.side = self.side.opponent();
    }

    pub fn unmake_move(&mut self, mv: Move) {
        self.put(mv.to, mv.captured);
        self.put(mv.from, mv.piece);
        self.side = self.side.opponent();
    }

    /// Apply `mv` for the lifetime of the returned guard.
    pub fn play(&mut self, mv: Move) -> MoveGuard<'_> {
        self.make_move(mv);
        MoveGuard { board: self, mv }
    }

    /// Walk every ray of every piece owned by the side to move, handing each
    /// reachable target to `visit`. King captures are visited like any other
    /// capture; `visit` decides whether to stop.
    fn walk<F>(&self, mut visit: F) -> ControlFlow<Move>
    where
        F: FnMut(Move) -> ControlFlow<Move>,
    {
        let side = self.side;
        for from in 0..BOARD_SIZE {
            let piece = self.squares[from];
            if piece.color() != Some(side) {
                continue;
            }
            for &offset in piece.offsets() {
                let mut to = from;
                loop {
                    // The sentinel ring keeps every step inside the buffer.
                    to = to.wrapping_add_signed(offset);
                    let target = self.squares[to];
                    if target == Piece::Offboard || target.color() == Some(side) {
                        break;
                    }
                    visit(Move::new(from, to, piece, target))?;
                    if target != Piece::Empty || !piece.slides() {
                        break;
                    }
                }
            }
        }
        ControlFlow::Continue(())
    }

    /// Pseudo-legal moves for the side to move, short-circuiting as soon as
    /// the enemy king is capturable.
    pub fn generate(&self) -> Generated {
        let mut moves = Vec::with_capacity(32);
        let flow = self.walk(|mv| {
            if mv.captured.is_king() {
                return ControlFlow::Break(mv);
            }
            moves.push(mv);
            ControlFlow::Continue(())
        });
        match flow {
            ControlFlow::Break(mv) => Generated::KingCapture(mv),
            ControlFlow::Continue(()) if moves.is_empty() => Generated::NoMoves,
            ControlFlow::Continue(()) => Generated::Moves(moves),
        }
    }

    /// Every move the side to move can play, king captures included.
    pub fn legal_moves(&self) -> Vec<Move> {
        let mut moves = Vec::with_capacity(32);
        let _ = self.walk(|mv| {
            moves.push(mv);
            ControlFlow::Continue(())
        });
        moves
    }

    /// Leaf count of the tree the search walks: positions with a capturable
    /// king or no moves are terminal.
    pub fn perft(&mut self, depth: u8) -> u64 {
        if depth == 0 {
            return 1;
        }
        let mut nodes = 0u64;
        for mv in self.generate().into_moves() {
            let mut child = self.play(mv);
            nodes += child.perft(depth - 1);
        }
        nodes
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::start()
    }
}

/// Scoped make/unmake: the move is taken back when the guard drops.
pub struct MoveGuard<'a> {
    board: &'a mut Board,
    mv: Move,
}

impl MoveGuard<'_> {
    pub fn mv(&self) -> Move {
        self.mv
    }
}

impl Deref for MoveGuard<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for MoveGuard<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for MoveGuard<'_> {
    fn drop(&mut self) {
        self.board.unmake_move(self.mv);
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (rank, row) in [(2, 1), (1, 2)] {
            write!(f, " {}", rank)?;
            for col in 1..BOARD_WIDTH - 1 {
                write!(f, " {}", self.squares[row * BOARD_WIDTH + col].symbol())?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}
